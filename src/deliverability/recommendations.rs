//! Remediation advice derived from failed checks.

use serde::Serialize;

use super::checks::{CheckKind, CheckResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
}

const REGULAR_MONITORING: Recommendation = Recommendation {
    title: "Regular Monitoring",
    description: "Set up regular monitoring of your email deliverability metrics and DNS records to catch issues early.",
};

fn recommendation_for(kind: CheckKind) -> Recommendation {
    match kind {
        CheckKind::Mx => Recommendation {
            title: "Set up MX Records",
            description: "Configure MX records in your DNS settings to enable email receiving. Contact your DNS provider or hosting company for assistance.",
        },
        CheckKind::Spf => Recommendation {
            title: "Configure SPF Record",
            description: "Add an SPF record to your DNS (e.g., \"v=spf1 include:_spf.google.com ~all\" for Google Workspace) to prevent email spoofing.",
        },
        CheckKind::Dkim => Recommendation {
            title: "Set up DKIM Authentication",
            description: "Enable DKIM in your email service provider and add the DKIM record to your DNS settings for better email authentication.",
        },
        CheckKind::Dmarc => Recommendation {
            title: "Implement DMARC Policy",
            description: "Create a DMARC record starting with \"v=DMARC1; p=none;\" to monitor email authentication and gradually strengthen your policy.",
        },
        CheckKind::Resolution => Recommendation {
            title: "Fix Domain Resolution",
            description: "Ensure your domain is properly configured and accessible. Check with your domain registrar or DNS provider.",
        },
    }
}

/// One recommendation per failed check, in check order, followed by a
/// monitoring reminder if anything failed. Empty when every check passed.
pub fn generate_recommendations(checks: &[CheckResult]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = checks
        .iter()
        .filter(|check| !check.passed)
        .map(|check| recommendation_for(check.kind))
        .collect();

    if !recommendations.is_empty() {
        recommendations.push(REGULAR_MONITORING);
    }
    recommendations
}
