//! DKIM selectors probed during a deliverability check.

/// Common DKIM selectors in priority order.
///
/// Generic names first, then provider defaults (Google Workspace, Microsoft
/// 365, Mailgun, SendGrid, Amazon SES, Mailchimp, Klaviyo and others). When
/// several selectors publish a key, the earliest in this list is reported.
pub const DKIM_SELECTORS: &[&str] = &[
    "default",
    "google",
    "k1",
    "k2",
    "mail",
    "dkim",
    "selector1",
    "selector2",
    "key1",
    "key2",
    "smtp",
    "email",
    "mailgun",
    "mandrill",
    "sendgrid",
    "amazonses",
    "sparkpost",
    "postmark",
    "mailchimp",
    "constantcontact",
    "campaignmonitor",
    "klaviyo",
    "brevo",
    "sendinblue",
    "mailjet",
    "elastic",
    "dkim1",
    "dkim2",
    "s1",
    "s2",
    "mxvault",
];
