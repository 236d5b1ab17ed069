use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Athlete;

/// Conventional number of scorers per team.
pub const DEFAULT_SCORING_SIZE: usize = 5;

/// Scorers of one team, best place first.
pub type ScoringSubset<'a> = SmallVec<[&'a Athlete; DEFAULT_SCORING_SIZE]>;

/// Athletes of `team`, in report order.
pub fn team_members<'a>(
    athletes: &'a [Athlete],
    team: &'a str,
) -> impl Iterator<Item = &'a Athlete> {
    athletes.iter().filter(move |athlete| athlete.team == team)
}

/// Top `size` athletes of `team` by finish place.
///
/// Athletes without a place never score. Equal places keep report order.
/// Teams with fewer placed athletes return all of them.
#[must_use]
pub fn scoring_subset<'a>(athletes: &'a [Athlete], team: &str, size: usize) -> ScoringSubset<'a> {
    let mut placed: ScoringSubset<'a> = athletes
        .iter()
        .filter(|athlete| athlete.team == team && athlete.place.is_some())
        .collect();
    placed.sort_by_key(|athlete| athlete.place);
    placed.truncate(size);
    placed
}

/// Team score from finish places: the sum over the scoring subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team: String,
    /// Sum of counted places; `None` when no athlete of the team placed.
    pub score: Option<u32>,
    /// Number of places that went into `score`.
    pub scorers: usize,
    /// `true` when the team fielded a full scoring subset.
    pub complete: bool,
}

#[must_use]
pub fn team_score(athletes: &[Athlete], team: &str, size: usize) -> TeamScore {
    let scorers = scoring_subset(athletes, team, size);
    let score = scorers
        .iter()
        .filter_map(|athlete| athlete.place)
        .fold(None, |acc: Option<u32>, place| {
            Some(acc.unwrap_or(0).saturating_add(place))
        });
    TeamScore {
        team: team.to_owned(),
        score,
        scorers: scorers.len(),
        complete: size > 0 && scorers.len() == size,
    }
}

/// Distinct team names, sorted. The unknown team (empty name) is excluded.
#[must_use]
pub fn team_names(athletes: &[Athlete]) -> Vec<String> {
    let mut names: Vec<String> = athletes
        .iter()
        .map(|athlete| athlete.team.as_str())
        .filter(|team| !team.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect();
    names.sort();
    names
}

/// First `count` distinct teams in report order, including the unknown team.
#[must_use]
pub fn default_teams(athletes: &[Athlete], count: usize) -> Vec<String> {
    athletes
        .iter()
        .map(|athlete| athlete.team.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .take(count)
        .map(str::to_owned)
        .collect()
}

/// Distinct team count, the unknown team included.
#[must_use]
pub fn team_count(athletes: &[Athlete]) -> usize {
    athletes
        .iter()
        .map(|athlete| athlete.team.as_str())
        .collect::<IndexSet<_>>()
        .len()
}
