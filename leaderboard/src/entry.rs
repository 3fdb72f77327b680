use rand::distributions::Alphanumeric;
use rand::Rng;

/// One ranked match record. Created when a match finishes and a winner name
/// is supplied; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    pub score: u32,
    pub opponent_score: u32,
    pub duration_ms: u64,
    /// Creation time, epoch milliseconds
    pub created_at: u64,
}

impl LeaderboardEntry {
    /// Score margin used as the primary ranking key
    pub fn margin(&self) -> i64 {
        i64::from(self.score) - i64::from(self.opponent_score)
    }
}

/// Timestamp-plus-suffix entry id, unique enough for a local leaderboard
pub fn make_id(now_ms: u64, rng: &mut impl Rng) -> String {
    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{}-{}", now_ms, suffix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(score: u32, opponent_score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: "1-abcdef".into(),
            player: "Ada".into(),
            opponent: Some("Right".into()),
            score,
            opponent_score,
            duration_ms: 30_000,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_margin() {
        assert_eq!(entry(5, 2).margin(), 3);
        assert_eq!(entry(1, 4).margin(), -3);
    }

    #[test]
    fn test_make_id_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = make_id(1_700_000_000_123, &mut rng);
        let (ts, suffix) = id.split_once('-').expect("dash separator");
        assert_eq!(ts, "1700000000123");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let e = entry(5, 3);
        let json = serde_json::to_string(&e).expect("serialize");
        let back: LeaderboardEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, e);
    }

    #[test]
    fn test_opponent_is_optional_in_stored_form() {
        let json = r#"{"id":"1-x","player":"Ada","score":5,"opponent_score":0,"duration_ms":1000,"created_at":10}"#;
        let e: LeaderboardEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(e.opponent, None);
    }
}
