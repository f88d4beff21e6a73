//! Free-text session search over denormalized joined fields.
//!
//! A session matches when the query occurs, case-insensitively and anywhere,
//! in one of:
//!
//! - the squad name
//! - the name of any assigned coach (lead, second, helper, gym)
//! - the location name
//! - the focus label
//! - the session content, after stripping markup
//!
//! Lookups that fail fall back to [`UNKNOWN_SQUAD`] / [`UNKNOWN`] rather than
//! dropping the session. Content matches come with an excerpt around the
//! first occurrence.

use crate::libs::highlight::{strip_markup, Highlighter, Segment, DEFAULT_EXCERPT_RADIUS};
use crate::libs::session::{Coach, CoachId, CoachRole, Location, LocationId, Session, Squad, SquadId, UNKNOWN, UNKNOWN_SQUAD};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub excerpt_radius: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { excerpt_radius: DEFAULT_EXCERPT_RADIUS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "role", rename_all = "snake_case")]
pub enum SearchField {
    Squad,
    Coach(CoachRole),
    Location,
    Focus,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedField {
    pub field: SearchField,
    pub text: String,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub session: &'a Session,
    pub squad_name: String,
    pub location_name: String,
    /// Content excerpt around the first match, when the content matched.
    pub excerpt: Option<String>,
    /// Only the fields the query matched, in the order listed above.
    pub highlighted_fields: Vec<HighlightedField>,
}

/// Resolves ids to display names for the joined fields.
struct Lookup<'a> {
    squads: HashMap<SquadId, &'a str>,
    locations: HashMap<LocationId, &'a str>,
    coaches: HashMap<CoachId, String>,
}

impl<'a> Lookup<'a> {
    fn new(squads: &'a [Squad], coaches: &[Coach], locations: &'a [Location]) -> Self {
        Self {
            squads: squads.iter().map(|s| (s.id, s.name.as_str())).collect(),
            locations: locations.iter().map(|l| (l.id, l.name.as_str())).collect(),
            coaches: coaches.iter().map(|c| (c.id, c.display_name())).collect(),
        }
    }

    fn squad(&self, id: SquadId) -> String {
        self.squads.get(&id).copied().unwrap_or(UNKNOWN_SQUAD).to_string()
    }

    fn location(&self, id: LocationId) -> String {
        self.locations.get(&id).copied().unwrap_or(UNKNOWN).to_string()
    }

    fn coach(&self, id: CoachId) -> String {
        self.coaches.get(&id).cloned().unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Searches with the default excerpt radius.
pub fn search_sessions<'a>(
    sessions: &'a [Session],
    squads: &[Squad],
    coaches: &[Coach],
    locations: &[Location],
    query: &str,
) -> Vec<SearchHit<'a>> {
    search_sessions_with(sessions, squads, coaches, locations, query, &SearchOptions::default())
}

/// Returns matching sessions in input order. A blank query returns every
/// session without excerpts or highlights.
pub fn search_sessions_with<'a>(
    sessions: &'a [Session],
    squads: &[Squad],
    coaches: &[Coach],
    locations: &[Location],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchHit<'a>> {
    let lookup = Lookup::new(squads, coaches, locations);
    let highlighter = Highlighter::new(query);

    let hits: Vec<SearchHit<'a>> = sessions
        .iter()
        .filter_map(|session| match_session(session, &lookup, &highlighter, options))
        .collect();

    tracing::debug!(query, scanned = sessions.len(), hits = hits.len(), "searched sessions");

    hits
}

fn match_session<'a>(
    session: &'a Session,
    lookup: &Lookup<'_>,
    highlighter: &Highlighter,
    options: &SearchOptions,
) -> Option<SearchHit<'a>> {
    let squad_name = lookup.squad(session.squad_id);
    let location_name = lookup.location(session.location_id);

    if highlighter.is_blank() {
        return Some(SearchHit { session, squad_name, location_name, excerpt: None, highlighted_fields: Vec::new() });
    }

    let mut candidates = vec![(SearchField::Squad, squad_name.clone())];
    for role in CoachRole::ALL {
        if let Some(coach_id) = session.coach_for(role) {
            candidates.push((SearchField::Coach(role), lookup.coach(coach_id)));
        }
    }
    candidates.push((SearchField::Location, location_name.clone()));
    candidates.push((SearchField::Focus, session.focus.label().to_string()));

    let mut highlighted_fields: Vec<HighlightedField> = candidates
        .into_iter()
        .filter(|(_, text)| highlighter.is_match(text))
        .map(|(field, text)| HighlightedField { segments: highlighter.segments(&text), field, text })
        .collect();

    let excerpt = session
        .content
        .as_deref()
        .map(strip_markup)
        .and_then(|plain| highlighter.excerpt(&plain, options.excerpt_radius));
    if let Some(excerpt) = &excerpt {
        highlighted_fields.push(HighlightedField {
            field: SearchField::Content,
            text: excerpt.to_string(),
            segments: highlighter.excerpt_segments(excerpt),
        });
    }

    if highlighted_fields.is_empty() {
        return None;
    }

    Some(SearchHit { session, squad_name, location_name, excerpt: excerpt.map(|e| e.to_string()), highlighted_fields })
}
