use crate::entry::LeaderboardEntry;

/// Most entries retained after ranking; the rest are dropped on save
pub const MAX_ENTRIES: usize = 25;

/// True when `candidate` beats `prior` for the same player:
/// higher score, tie-broken by shorter duration.
fn improves(candidate: &LeaderboardEntry, prior: &LeaderboardEntry) -> bool {
    candidate.score > prior.score
        || (candidate.score == prior.score && candidate.duration_ms < prior.duration_ms)
}

/// Sort in ranking order: margin desc, raw score desc, duration asc
/// (faster wins rank higher), creation time desc as the final tie-break.
pub fn rank_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.margin()
            .cmp(&a.margin())
            .then(b.score.cmp(&a.score))
            .then(a.duration_ms.cmp(&b.duration_ms))
            .then(b.created_at.cmp(&a.created_at))
    });
}

/// Insert `entry` into `list`, keeping at most one record per player name
/// (whichever is better), then re-rank and cap the collection.
pub fn merge_entry(mut list: Vec<LeaderboardEntry>, entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
    match list.iter().position(|e| e.player == entry.player) {
        Some(i) if improves(&entry, &list[i]) => list[i] = entry,
        Some(_) => {}
        None => list.push(entry),
    }
    rank_entries(&mut list);
    list.truncate(MAX_ENTRIES);
    list
}
