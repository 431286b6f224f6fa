//! Wizard step sequence and cursor.

use serde::Serialize;

/// Static metadata for one wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon name; rendering is the host's concern
    pub icon: &'static str,
}

/// The fixed planner sequence, in display order
pub const WIZARD_STEPS: &[WizardStep] = &[
    WizardStep {
        id: "personal",
        title: "Personal Details",
        description: "Tell us about yourself",
        icon: "home",
    },
    WizardStep {
        id: "income",
        title: "Income Details",
        description: "Your monthly earnings",
        icon: "dollar-sign",
    },
    WizardStep {
        id: "expenses",
        title: "Expense Details",
        description: "Your monthly spending",
        icon: "bar-chart",
    },
    WizardStep {
        id: "investments",
        title: "Investment & Savings",
        description: "Your financial assets",
        icon: "piggy-bank",
    },
    WizardStep {
        id: "goals",
        title: "Financial Goals",
        description: "What you want to achieve",
        icon: "target",
    },
    WizardStep {
        id: "documents",
        title: "Documents & Information",
        description: "Additional details that help us",
        icon: "file-text",
    },
];

/// Current position within the fixed step sequence. The index is bounded to
/// [0, steps-1]; movement past either end and out-of-range jumps are no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
}

impl StepCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static WizardStep {
        &WIZARD_STEPS[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == WIZARD_STEPS.len() - 1
    }

    /// Move to the next step, stopping at the last one.
    pub fn advance(&mut self) {
        if !self.is_last() {
            self.index += 1;
        }
    }

    /// Move to the previous step, stopping at the first one.
    pub fn back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Jump directly to a step; out-of-range targets are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < WIZARD_STEPS.len() {
            self.index = index;
        }
    }

    /// Completion percentage for the progress bar
    pub fn progress_percent(&self) -> f64 {
        (self.index as f64 / (WIZARD_STEPS.len() - 1) as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_is_bounded_at_both_ends() {
        let mut cursor = StepCursor::new();
        cursor.back();
        assert!(cursor.is_first());

        for _ in 0..20 {
            cursor.advance();
        }
        assert!(cursor.is_last());
        assert_eq!(cursor.index(), WIZARD_STEPS.len() - 1);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut cursor = StepCursor::new();
        cursor.jump_to(2);
        assert_eq!(cursor.current().id, "expenses");

        cursor.jump_to(WIZARD_STEPS.len());
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_progress_spans_zero_to_hundred() {
        let mut cursor = StepCursor::new();
        assert_eq!(cursor.progress_percent(), 0.0);

        cursor.jump_to(WIZARD_STEPS.len() - 1);
        assert_eq!(cursor.progress_percent(), 100.0);
    }

    #[test]
    fn test_sequence_has_six_unique_steps() {
        assert_eq!(WIZARD_STEPS.len(), 6);
        for (i, a) in WIZARD_STEPS.iter().enumerate() {
            for b in WIZARD_STEPS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
