//! Weekly meal plan.
//!
//! A plan is a grid of (day, slot) cells, each holding an optional recipe
//! summary. The day order and the slot set come from the user's preferences.
//! Updates are copy-on-write: [`WeeklyPlan::assign`] and
//! [`WeeklyPlan::clear`] return a new plan and leave the receiver untouched.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Day, MealSlot, RecipeSummary};

/// Persisted form of a plan: day -> slot -> summary or null.
pub type PlanDocument = BTreeMap<Day, BTreeMap<MealSlot, Option<RecipeSummary>>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("slot '{slot}' is not part of the current planner layout")]
    SlotNotConfigured { slot: MealSlot },
    #[error("day '{day}' is not part of the current planner layout")]
    DayNotConfigured { day: Day },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlan {
    days: Vec<Day>,
    slots: Vec<MealSlot>,
    cells: HashMap<Day, HashMap<MealSlot, Option<RecipeSummary>>>,
}

impl WeeklyPlan {
    /// Create a plan with every (day, slot) cell empty.
    pub fn empty(days: Vec<Day>, slots: Vec<MealSlot>) -> Self {
        let cells = days
            .iter()
            .map(|day| (*day, slots.iter().map(|slot| (*slot, None)).collect()))
            .collect();
        Self { days, slots, cells }
    }

    /// Rebuild a plan from its stored document.
    ///
    /// Returns `None` when the document's days or slots differ from the
    /// requested layout.
    pub fn from_document(doc: PlanDocument, days: Vec<Day>, slots: Vec<MealSlot>) -> Option<Self> {
        let wanted_days: HashSet<Day> = days.iter().copied().collect();
        let stored_days: HashSet<Day> = doc.keys().copied().collect();
        if wanted_days != stored_days {
            return None;
        }

        let wanted_slots: HashSet<MealSlot> = slots.iter().copied().collect();
        if doc
            .values()
            .any(|row| row.keys().copied().collect::<HashSet<_>>() != wanted_slots)
        {
            return None;
        }

        let cells = doc
            .into_iter()
            .map(|(day, row)| (day, row.into_iter().collect()))
            .collect();
        Some(Self { days, slots, cells })
    }

    pub fn to_document(&self) -> PlanDocument {
        self.cells
            .iter()
            .map(|(day, row)| {
                (
                    *day,
                    row.iter()
                        .map(|(slot, cell)| (*slot, cell.clone()))
                        .collect(),
                )
            })
            .collect()
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn slots(&self) -> &[MealSlot] {
        &self.slots
    }

    pub fn get(&self, day: Day, slot: MealSlot) -> Option<&RecipeSummary> {
        self.cells
            .get(&day)
            .and_then(|row| row.get(&slot))
            .and_then(Option::as_ref)
    }

    /// Return a copy of this plan with one cell set to `summary`.
    pub fn assign(
        &self,
        day: Day,
        slot: MealSlot,
        summary: RecipeSummary,
    ) -> Result<Self, PlanError> {
        self.with_cell(day, slot, Some(summary))
    }

    /// Return a copy of this plan with one cell emptied.
    pub fn clear(&self, day: Day, slot: MealSlot) -> Result<Self, PlanError> {
        self.with_cell(day, slot, None)
    }

    /// An empty plan with the same layout.
    pub fn cleared(&self) -> Self {
        Self::empty(self.days.clone(), self.slots.clone())
    }

    /// Same assignments presented in a different day order.
    ///
    /// `days` must be a permutation of this plan's days; otherwise `None`.
    pub fn reordered(&self, days: Vec<Day>) -> Option<Self> {
        let current: HashSet<Day> = self.days.iter().copied().collect();
        let wanted: HashSet<Day> = days.iter().copied().collect();
        if current != wanted || days.len() != self.days.len() {
            return None;
        }
        Some(Self {
            days,
            slots: self.slots.clone(),
            cells: self.cells.clone(),
        })
    }

    /// Filled cells in display order.
    pub fn assignments(&self) -> impl Iterator<Item = (Day, MealSlot, &RecipeSummary)> + '_ {
        self.days.iter().flat_map(move |day| {
            self.slots
                .iter()
                .filter_map(move |slot| self.get(*day, *slot).map(|s| (*day, *slot, s)))
        })
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments().count()
    }

    /// Ids of all planned recipes, each once, in the order they are first
    /// met scanning days then slots.
    pub fn distinct_recipe_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.assignments()
            .filter(|(_, _, summary)| seen.insert(summary.id.clone()))
            .map(|(_, _, summary)| summary.id.clone())
            .collect()
    }

    fn with_cell(
        &self,
        day: Day,
        slot: MealSlot,
        value: Option<RecipeSummary>,
    ) -> Result<Self, PlanError> {
        if !self.slots.contains(&slot) {
            return Err(PlanError::SlotNotConfigured { slot });
        }
        let mut next = self.clone();
        let row = next
            .cells
            .get_mut(&day)
            .ok_or(PlanError::DayNotConfigured { day })?;
        row.insert(slot, value);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SlotSet, WeekStart};

    fn plan() -> WeeklyPlan {
        WeeklyPlan::empty(WeekStart::Mon.days(), SlotSet::Three.slots())
    }

    fn summary(id: &str) -> RecipeSummary {
        RecipeSummary::new(id, format!("Recipe {}", id))
    }

    #[test]
    fn test_empty_plan_has_every_cell() {
        let plan = plan();
        assert_eq!(plan.days().len(), 7);
        assert_eq!(plan.slots().len(), 3);
        for day in plan.days() {
            for slot in plan.slots() {
                assert!(plan.get(*day, *slot).is_none());
            }
        }
        assert_eq!(plan.to_document().len(), 7);
        assert_eq!(plan.assigned_count(), 0);
    }

    #[test]
    fn test_assign_touches_only_one_cell() {
        let before = plan().assign(Day::Tue, MealSlot::Lunch, summary("1")).unwrap();
        let after = before
            .assign(Day::Wed, MealSlot::Dinner, summary("2"))
            .unwrap();

        for day in after.days() {
            for slot in after.slots() {
                if (*day, *slot) == (Day::Wed, MealSlot::Dinner) {
                    assert_eq!(after.get(*day, *slot), Some(&summary("2")));
                } else {
                    assert_eq!(after.get(*day, *slot), before.get(*day, *slot));
                }
            }
        }
    }

    #[test]
    fn test_assign_is_copy_on_write() {
        let original = plan();
        let updated = original
            .assign(Day::Mon, MealSlot::Breakfast, summary("1"))
            .unwrap();

        assert!(original.get(Day::Mon, MealSlot::Breakfast).is_none());
        assert_eq!(updated.get(Day::Mon, MealSlot::Breakfast), Some(&summary("1")));
    }

    #[test]
    fn test_assign_unconfigured_slot_fails() {
        let result = plan().assign(Day::Mon, MealSlot::Snack, summary("1"));
        assert_eq!(
            result,
            Err(PlanError::SlotNotConfigured {
                slot: MealSlot::Snack
            })
        );
    }

    #[test]
    fn test_clear_and_cleared() {
        let plan = plan()
            .assign(Day::Fri, MealSlot::Dinner, summary("1"))
            .unwrap()
            .assign(Day::Sat, MealSlot::Dinner, summary("2"))
            .unwrap();

        let one_cleared = plan.clear(Day::Fri, MealSlot::Dinner).unwrap();
        assert!(one_cleared.get(Day::Fri, MealSlot::Dinner).is_none());
        assert_eq!(one_cleared.assigned_count(), 1);

        let all_cleared = plan.cleared();
        assert_eq!(all_cleared, self::plan());
    }

    #[test]
    fn test_distinct_ids_in_discovery_order() {
        let plan = plan()
            .assign(Day::Sun, MealSlot::Dinner, summary("a"))
            .unwrap()
            .assign(Day::Mon, MealSlot::Dinner, summary("b"))
            .unwrap()
            .assign(Day::Mon, MealSlot::Lunch, summary("a"))
            .unwrap()
            .assign(Day::Wed, MealSlot::Breakfast, summary("b"))
            .unwrap();

        assert_eq!(plan.distinct_recipe_ids(), vec!["a", "b"]);
        assert_eq!(plan.assigned_count(), 4);
    }

    #[test]
    fn test_document_roundtrip() {
        let plan = plan()
            .assign(Day::Thu, MealSlot::Lunch, summary("7"))
            .unwrap();

        let json = serde_json::to_string(&plan.to_document()).unwrap();
        assert!(json.contains("\"Thu\""));
        assert!(json.contains("\"Lunch\""));

        let doc: PlanDocument = serde_json::from_str(&json).unwrap();
        let restored =
            WeeklyPlan::from_document(doc, WeekStart::Mon.days(), SlotSet::Three.slots()).unwrap();
        assert_eq!(restored, plan);
    }

    #[test]
    fn test_document_with_other_layout_is_rejected() {
        let four = WeeklyPlan::empty(WeekStart::Mon.days(), SlotSet::Four.slots());
        let restored = WeeklyPlan::from_document(
            four.to_document(),
            WeekStart::Mon.days(),
            SlotSet::Three.slots(),
        );
        assert!(restored.is_none());
    }

    #[test]
    fn test_reordered_keeps_assignments() {
        let plan = plan()
            .assign(Day::Sun, MealSlot::Lunch, summary("1"))
            .unwrap();
        let sunday_first = plan.reordered(WeekStart::Sun.days()).unwrap();

        assert_eq!(sunday_first.days()[0], Day::Sun);
        assert_eq!(sunday_first.get(Day::Sun, MealSlot::Lunch), Some(&summary("1")));
        assert!(plan.reordered(vec![Day::Mon]).is_none());
    }
}
