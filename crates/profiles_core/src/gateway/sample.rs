//! Development sample records used by `seed` and the in-memory gateway.
//!
//! # Invariants
//! - Emails and phones are unique across the set.

use crate::model::draft::NewProfessional;
use crate::model::professional::Source;

/// Development sample set. Entries without email or phone exercise the
/// single-contact display paths.
pub fn sample_professionals() -> Vec<NewProfessional> {
    [
        ("Alice Johnson", Some("alice@techcorp.com"), Some("5551001001"), "TechCorp", "Software Engineer", Source::Direct),
        ("Bob Smith", Some("bob@innovate.io"), Some("5551001002"), "Innovate.io", "Product Manager", Source::Partner),
        ("Carol Williams", Some("carol@startup.co"), Some("5551001003"), "StartupCo", "CTO", Source::Internal),
        ("David Brown", Some("david@enterprise.com"), Some("5551001004"), "Enterprise Inc", "Data Scientist", Source::Direct),
        ("Eva Martinez", Some("eva@consulting.biz"), Some("5551001005"), "Consulting Biz", "Senior Consultant", Source::Partner),
        ("Frank Lee", Some("frank@devshop.dev"), Some("5551001006"), "DevShop", "Full Stack Developer", Source::Direct),
        ("Grace Kim", Some("grace@analytics.ai"), Some("5551001007"), "Analytics AI", "ML Engineer", Source::Internal),
        ("Henry Chen", Some("henry@fintech.com"), Some("5551001008"), "FinTech Corp", "Backend Engineer", Source::Partner),
        ("Ivy Thompson", None, Some("5551001009"), "Design Studio", "UX Designer", Source::Direct),
        ("Jack Wilson", Some("jack@cloudservices.net"), None, "Cloud Services", "DevOps Engineer", Source::Internal),
    ]
    .into_iter()
    .map(
        |(full_name, email, phone, company_name, job_title, source)| NewProfessional {
            full_name: full_name.to_string(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            company_name: company_name.to_string(),
            job_title: job_title.to_string(),
            source,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::sample_professionals;
    use std::collections::HashSet;

    #[test]
    fn sample_contacts_are_unique() {
        let samples = sample_professionals();
        let emails = samples.iter().filter_map(|s| s.email.as_deref());
        let phones = samples.iter().filter_map(|s| s.phone.as_deref());
        assert_eq!(
            emails.clone().count(),
            emails.collect::<HashSet<_>>().len()
        );
        assert_eq!(
            phones.clone().count(),
            phones.collect::<HashSet<_>>().len()
        );
    }
}
