//! Live text filtering of the option registry.

use super::registry::OptionRegistry;
use ratatui::text::Line;

/// Default no-results message prefix.
pub const DEFAULT_NO_MATCH_TEXT: &str = "No results matched";

/// What to show when a query hides every option.
#[derive(Debug, Clone, Default)]
pub enum NoResults {
    /// `"<no_match_text> \"<query>\""`, rewritten on every search.
    #[default]
    Default,
    /// A caller-owned line. The filter toggles its visibility but never
    /// touches its content.
    Custom(Line<'static>),
}

/// Query buffer plus the visibility pass over a registry.
///
/// The cursor is a char index so multi-byte queries edit safely.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    query: String,
    cursor: usize,
    no_match_text: String,
    no_results: NoResults,
    no_results_visible: bool,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFilter {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor: 0,
            no_match_text: DEFAULT_NO_MATCH_TEXT.to_string(),
            no_results: NoResults::Default,
            no_results_visible: false,
        }
    }

    pub fn set_no_match_text(&mut self, text: impl Into<String>) {
        self.no_match_text = text.into();
    }

    pub fn no_match_text(&self) -> &str {
        &self.no_match_text
    }

    pub fn set_no_results(&mut self, no_results: NoResults) {
        self.no_results = no_results;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Filter with `query`, replacing the current one. Returns whether at
    /// least one option is still visible.
    pub fn apply<T>(
        &mut self,
        registry: &mut OptionRegistry<T>,
        query: &str,
        case_sensitive: bool,
    ) -> bool {
        self.query = query.to_string();
        self.cursor = self.query.chars().count();
        self.refresh(registry, case_sensitive)
    }

    /// Re-run the current query, e.g. after an edit or after options changed.
    pub fn refresh<T>(&mut self, registry: &mut OptionRegistry<T>, case_sensitive: bool) -> bool {
        let needle = if case_sensitive {
            self.query.clone()
        } else {
            self.query.to_lowercase()
        };

        let mut any_visible = false;
        for option in registry.options_mut() {
            let contains = if case_sensitive {
                option.display_value().contains(&needle)
            } else {
                option.display_value().to_lowercase().contains(&needle)
            };
            option.hidden = !contains;
            any_visible |= contains;
        }
        recompute_groups(registry);

        self.no_results_visible = !any_visible;
        log::debug!(
            "select filter {:?}: {} visible of {}",
            self.query,
            registry.options().iter().filter(|o| !o.is_hidden()).count(),
            registry.len()
        );
        any_visible
    }

    /// Unhide every option and empty the query. Selection is untouched.
    pub fn clear<T>(&mut self, registry: &mut OptionRegistry<T>) {
        for option in registry.options_mut() {
            option.hidden = false;
        }
        recompute_groups(registry);
        self.query.clear();
        self.cursor = 0;
        self.no_results_visible = false;
    }

    /// Whether the no-results indicator is showing.
    pub fn no_results_visible(&self) -> bool {
        self.no_results_visible
    }

    /// The indicator line, when visible.
    pub fn no_results_line(&self) -> Option<Line<'static>> {
        if !self.no_results_visible {
            return None;
        }
        Some(match &self.no_results {
            NoResults::Default => Line::raw(format!("{} \"{}\"", self.no_match_text, self.query)),
            NoResults::Custom(line) => line.clone(),
        })
    }

    // --- query editing ---

    fn byte_offset(s: &str, char_idx: usize) -> usize {
        s.char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(s.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = Self::byte_offset(&self.query, self.cursor);
        self.query.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor. Returns whether anything changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = Self::byte_offset(&self.query, self.cursor);
        self.query.remove(at);
        true
    }

    /// Delete the char under the cursor. Returns whether anything changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.query.chars().count() {
            return false;
        }
        let at = Self::byte_offset(&self.query, self.cursor);
        self.query.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.query.chars().count());
    }
}

/// A non-empty group is hidden iff all of its members are hidden. Full
/// rescan; option counts are small.
fn recompute_groups<T>(registry: &mut OptionRegistry<T>) {
    let hidden: Vec<bool> = registry
        .groups()
        .iter()
        .map(|g| {
            !g.members.is_empty()
                && g.members
                    .iter()
                    .all(|id| registry.get(*id).is_none_or(|o| o.is_hidden()))
        })
        .collect();
    for (group, hidden) in registry.groups_mut().iter_mut().zip(hidden) {
        group.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::option::{OptionGroup, SelectOption};

    fn countries() -> OptionRegistry<&'static str> {
        let mut reg = OptionRegistry::new();
        reg.append(SelectOption::new("us", "United States", "USA"));
        reg.append(SelectOption::new("uk", "United Kingdom", "GBR"));
        reg
    }

    fn visible(reg: &OptionRegistry<&'static str>) -> Vec<String> {
        reg.options()
            .iter()
            .filter(|o| !o.is_hidden())
            .map(|o| o.display_value().to_string())
            .collect()
    }

    #[test]
    fn united_states_scenario() {
        let mut reg = countries();
        let mut filter = SearchFilter::new();

        assert!(filter.apply(&mut reg, "United", false));
        assert_eq!(visible(&reg), vec!["United States", "United Kingdom"]);
        assert!(filter.no_results_line().is_none());

        assert!(filter.apply(&mut reg, "States", false));
        assert_eq!(visible(&reg), vec!["United States"]);

        assert!(!filter.apply(&mut reg, "zzz", false));
        assert!(visible(&reg).is_empty());
        assert!(filter.no_results_visible());
        let line = filter.no_results_line().expect("indicator");
        assert_eq!(line.to_string(), "No results matched \"zzz\"");
    }

    #[test]
    fn case_folding_unless_sensitive() {
        let mut reg = countries();
        let mut filter = SearchFilter::new();
        assert!(filter.apply(&mut reg, "kingdom", false));
        assert_eq!(visible(&reg), vec!["United Kingdom"]);
        assert!(!filter.apply(&mut reg, "kingdom", true));
        assert!(filter.apply(&mut reg, "Kingdom", true));
    }

    #[test]
    fn hidden_matches_contains_for_every_option() {
        let mut reg = countries();
        reg.append(SelectOption::new("de", "Germany", "DEU"));
        let mut filter = SearchFilter::new();
        for q in ["", "u", "ED", "an", "x"] {
            filter.apply(&mut reg, q, false);
            for o in reg.options() {
                let expected = !o.display_value().to_lowercase().contains(&q.to_lowercase());
                assert_eq!(o.is_hidden(), expected, "query {q:?} option {}", o.display_value());
            }
        }
    }

    #[test]
    fn clear_unhides_everything() {
        let mut reg = countries();
        let mut filter = SearchFilter::new();
        filter.apply(&mut reg, "zzz", false);
        filter.clear(&mut reg);
        assert!(reg.options().iter().all(|o| !o.is_hidden()));
        assert!(filter.query().is_empty());
        assert!(!filter.no_results_visible());
    }

    #[test]
    fn custom_no_results_is_only_toggled() {
        let mut reg = countries();
        let mut filter = SearchFilter::new();
        filter.set_no_results(NoResults::Custom(Line::raw("nothing here")));
        filter.apply(&mut reg, "zzz", false);
        assert_eq!(filter.no_results_line().map(|l| l.to_string()).as_deref(), Some("nothing here"));
        filter.apply(&mut reg, "United", false);
        assert!(filter.no_results_line().is_none());
    }

    #[test]
    fn custom_no_match_text() {
        let mut reg = countries();
        let mut filter = SearchFilter::new();
        filter.set_no_match_text("Nothing for");
        filter.apply(&mut reg, "q", false);
        assert_eq!(filter.no_results_line().map(|l| l.to_string()).as_deref(), Some("Nothing for \"q\""));
    }

    #[test]
    fn group_visibility_is_derived() {
        let mut reg = OptionRegistry::new();
        reg.add_group(
            OptionGroup::new("Americas")
                .option(SelectOption::text("Canada"))
                .option(SelectOption::text("Chile")),
        );
        reg.add_group(OptionGroup::new("Europe").option(SelectOption::text("France")));
        let mut filter = SearchFilter::new();

        filter.apply(&mut reg, "fra", false);
        assert!(reg.groups()[0].is_hidden());
        assert!(!reg.groups()[1].is_hidden());

        filter.apply(&mut reg, "chi", false);
        assert!(!reg.groups()[0].is_hidden());
        assert!(reg.groups()[1].is_hidden());

        filter.clear(&mut reg);
        assert!(reg.groups().iter().all(|g| !g.is_hidden()));
    }

    #[test]
    fn editing_handles_multibyte() {
        let mut filter = SearchFilter::new();
        for c in "café".chars() {
            filter.insert_char(c);
        }
        assert_eq!(filter.query(), "café");
        filter.cursor_left();
        assert!(filter.delete_forward());
        assert_eq!(filter.query(), "caf");
        assert!(filter.delete_back());
        assert_eq!(filter.query(), "ca");
        filter.cursor_left();
        filter.cursor_left();
        assert!(!filter.delete_back());
        filter.cursor_right();
        filter.cursor_right();
        filter.cursor_right();
        assert_eq!(filter.cursor(), 2);
    }
}
