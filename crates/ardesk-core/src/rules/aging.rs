use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgingBucket {
    #[serde(rename = "0-30")]
    UpTo30,
    #[serde(rename = "31-60")]
    Days31To60,
    #[serde(rename = "60+")]
    Over60,
}

impl AgingBucket {
    pub const ALL: [AgingBucket; 3] = [
        AgingBucket::UpTo30,
        AgingBucket::Days31To60,
        AgingBucket::Over60,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgingBucket::UpTo30 => "0-30",
            AgingBucket::Days31To60 => "31-60",
            AgingBucket::Over60 => "60+",
        }
    }

    pub fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim() {
            "0-30" => Some(AgingBucket::UpTo30),
            "31-60" => Some(AgingBucket::Days31To60),
            "60+" | "61+" => Some(AgingBucket::Over60),
            _ => None,
        }
    }
}

pub fn classify_aging(days_overdue: u32) -> AgingBucket {
    if days_overdue <= 30 {
        AgingBucket::UpTo30
    } else if days_overdue <= 60 {
        AgingBucket::Days31To60
    } else {
        AgingBucket::Over60
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_aging, AgingBucket};

    #[test]
    fn bucket_boundaries() {
        assert_eq!(classify_aging(0), AgingBucket::UpTo30);
        assert_eq!(classify_aging(30), AgingBucket::UpTo30);
        assert_eq!(classify_aging(31), AgingBucket::Days31To60);
        assert_eq!(classify_aging(35), AgingBucket::Days31To60);
        assert_eq!(classify_aging(60), AgingBucket::Days31To60);
        assert_eq!(classify_aging(61), AgingBucket::Over60);
        assert_eq!(classify_aging(u32::MAX), AgingBucket::Over60);
    }

    #[test]
    fn labels_parse() {
        for bucket in AgingBucket::ALL {
            assert_eq!(AgingBucket::parse_label(bucket.label()), Some(bucket));
        }
        assert_eq!(AgingBucket::parse_label("90+"), None);
    }
}
