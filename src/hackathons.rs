// Built-in hackathon listings
//
// The service is stateless, so the listing endpoint serves this curated set,
// filterable by status, region, and mode.

use crate::models::Hackathon;

/// The curated hackathon listings served by GET /api/hackathons
pub fn builtin_hackathons() -> Vec<Hackathon> {
    vec![
        Hackathon {
            name: "Smart India Hackathon 2025".to_string(),
            organizer: "Government of India".to_string(),
            start_date: "2025-12-01".to_string(),
            end_date: "2025-12-03".to_string(),
            location: "Multiple cities across India".to_string(),
            mode: "hybrid".to_string(),
            themes: vec![
                "Smart Education".to_string(),
                "Healthcare".to_string(),
                "Agriculture".to_string(),
                "Clean Energy".to_string(),
            ],
            prizes: "₹1 Lakh for winners".to_string(),
            registration_link: "https://sih.gov.in".to_string(),
            status: "upcoming".to_string(),
            region: "india".to_string(),
        },
        Hackathon {
            name: "HackMIT 2025".to_string(),
            organizer: "Massachusetts Institute of Technology".to_string(),
            start_date: "2025-11-25".to_string(),
            end_date: "2025-11-27".to_string(),
            location: "Cambridge, MA".to_string(),
            mode: "online".to_string(),
            themes: vec![
                "AI/ML".to_string(),
                "Blockchain".to_string(),
                "IoT".to_string(),
                "Web3".to_string(),
            ],
            prizes: "$10,000 in prizes".to_string(),
            registration_link: "https://hackmit.org".to_string(),
            status: "upcoming".to_string(),
            region: "global".to_string(),
        },
        Hackathon {
            name: "DevJams 2025".to_string(),
            organizer: "Major League Hacking".to_string(),
            start_date: "2025-11-22".to_string(),
            end_date: "2025-11-24".to_string(),
            location: "Online".to_string(),
            mode: "online".to_string(),
            themes: vec![
                "Open Innovation".to_string(),
                "Gaming".to_string(),
                "Developer Tools".to_string(),
            ],
            prizes: "Swag and prizes".to_string(),
            registration_link: "https://mlh.io".to_string(),
            status: "ongoing".to_string(),
            region: "global".to_string(),
        },
        Hackathon {
            name: "Code for Good".to_string(),
            organizer: "JP Morgan Chase".to_string(),
            start_date: "2025-12-10".to_string(),
            end_date: "2025-12-12".to_string(),
            location: "Mumbai, Bangalore".to_string(),
            mode: "offline".to_string(),
            themes: vec![
                "Social Impact".to_string(),
                "Financial Inclusion".to_string(),
                "Education".to_string(),
            ],
            prizes: "Job opportunities + prizes".to_string(),
            registration_link: "https://careers.jpmorgan.com".to_string(),
            status: "upcoming".to_string(),
            region: "india".to_string(),
        },
    ]
}

/// Filter listings by optional status, region, and mode
pub fn filter_hackathons(
    hackathons: Vec<Hackathon>,
    status: Option<&str>,
    region: Option<&str>,
    mode: Option<&str>,
) -> Vec<Hackathon> {
    hackathons
        .into_iter()
        .filter(|h| status.map(|s| h.status == s).unwrap_or(true))
        .filter(|h| region.map(|r| h.region == r).unwrap_or(true))
        .filter(|h| mode.map(|m| h.mode == m).unwrap_or(true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_listing_is_nonempty() {
        assert_eq!(builtin_hackathons().len(), 4);
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let all = filter_hackathons(builtin_hackathons(), None, None, None);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_filter_by_status() {
        let ongoing = filter_hackathons(builtin_hackathons(), Some("ongoing"), None, None);
        assert_eq!(ongoing.len(), 1);
        assert_eq!(ongoing[0].name, "DevJams 2025");
    }

    #[test]
    fn test_filters_combine() {
        let filtered =
            filter_hackathons(builtin_hackathons(), Some("upcoming"), Some("india"), None);
        assert_eq!(filtered.len(), 2);

        let narrowed = filter_hackathons(
            builtin_hackathons(),
            Some("upcoming"),
            Some("india"),
            Some("offline"),
        );
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].name, "Code for Good");
    }

    #[test]
    fn test_unmatched_filter_returns_empty() {
        let none = filter_hackathons(builtin_hackathons(), Some("finished"), None, None);
        assert!(none.is_empty());
    }
}
