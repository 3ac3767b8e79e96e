//! Day plans: the list of actions to simulate.
//!
//! Plans are TOML files with one `[[actions]]` table per action:
//!
//! ```toml
//! [[actions]]
//! time = "07:10"
//! kind = "food"
//! id = 18
//! volume = 1.0
//! ```

use crate::{Action, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered list of actions for one day
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl DayPlan {
    /// Load a plan from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let plan = Self::parse(&contents)?;
        tracing::info!("Loaded {} actions from {:?}", plan.actions.len(), path);
        Ok(plan)
    }

    /// Parse a plan from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// A typical day: three meals, a snack and three bouts of exercise
    pub fn sample() -> Self {
        Self {
            actions: vec![
                // breakfast
                Action::food("07:10", 18, 1.0),
                Action::food("07:20", 77, 0.8),
                Action::exercise("08:50", 2, 0.7),
                // lunch
                Action::food("12:10", 121, 0.5),
                Action::food("12:20", 111, 0.5),
                // snack
                Action::food("14:20", 81, 0.3),
                Action::exercise("15:20", 6, 0.5),
                // dinner
                Action::food("18:30", 120, 0.3),
                Action::food("18:40", 21, 0.4),
                Action::food("18:50", 20, 0.2),
                Action::exercise("20:30", 3, 0.5),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builtin_catalog, Error, ItemKind};

    #[test]
    fn test_parse_plan() {
        let plan = DayPlan::parse(
            r#"
[[actions]]
time = "07:10"
kind = "food"
id = 18
volume = 1.0

[[actions]]
time = "07:40"
kind = "exercise"
id = 4
volume = 0.5
"#,
        )
        .unwrap();

        assert_eq!(
            plan.actions,
            vec![Action::food("07:10", 18, 1.0), Action::exercise("07:40", 4, 0.5)]
        );
    }

    #[test]
    fn test_empty_plan() {
        let plan = DayPlan::parse("").unwrap();
        assert!(plan.actions.is_empty());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = DayPlan::parse(
            "[[actions]]\ntime = \"07:10\"\nkind = \"nap\"\nid = 1\nvolume = 1.0\n",
        );
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("day.toml");
        std::fs::write(
            &path,
            "[[actions]]\ntime = \"20:30\"\nkind = \"exercise\"\nid = 3\nvolume = 0.5\n",
        )
        .unwrap();

        let plan = DayPlan::load(&path).unwrap();
        assert_eq!(plan.actions.len(), 1);
        assert_eq!(plan.actions[0].kind, ItemKind::Exercise);
    }

    #[test]
    fn test_sample_plan_resolves() {
        let catalog = builtin_catalog().unwrap();
        for action in DayPlan::sample().actions {
            assert!(
                catalog.lookup(action.kind, action.id).is_ok(),
                "{} {} missing from catalog",
                action.kind,
                action.id
            );
        }
    }
}
