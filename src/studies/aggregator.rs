use crate::{
    catalog::MotionCatalog,
    db::{normalize_code, MotionInput, MotionOccurrence, NewOccurrence},
    error::StudyError,
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StudyTotals {
    pub total_mods: f64,
    pub total_motions: i64,
}

impl StudyTotals {
    /// Returns `None` when the motion count would no longer fit in an `i64`.
    fn add(&mut self, mod_value: f64, quantity: i64) -> Option<()> {
        self.total_motions = self.total_motions.checked_add(quantity)?;
        self.total_mods += mod_value * quantity as f64;
        Some(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedMotions {
    pub totals: StudyTotals,
    pub occurrences: Vec<NewOccurrence>,
}

/// Validate `inputs` against the catalog and total them. Fails on the first
/// unknown code, non-positive quantity, or a motion count too large to total;
/// nothing is returned for partial input.
pub fn aggregate(
    inputs: &[MotionInput],
    catalog: &MotionCatalog,
) -> Result<AggregatedMotions, StudyError> {
    let mut totals = StudyTotals::default();
    let mut occurrences = Vec::with_capacity(inputs.len());

    for (position, input) in inputs.iter().enumerate() {
        if input.quantity <= 0 {
            return Err(StudyError::InvalidInput(format!(
                "quantity for {} must be positive, got {}",
                input.code, input.quantity
            )));
        }

        let motion = catalog
            .lookup(&input.code)
            .ok_or_else(|| StudyError::InvalidMotionCode(normalize_code(&input.code)))?;

        totals.add(motion.mod_value, input.quantity).ok_or_else(|| {
            StudyError::InvalidInput(format!(
                "total motion count overflows at position {position} ({})",
                motion.code
            ))
        })?;
        occurrences.push(NewOccurrence {
            motion_code: motion.code.clone(),
            sequence_order: position as i64,
            quantity: input.quantity,
        });
    }

    Ok(AggregatedMotions {
        totals,
        occurrences,
    })
}

/// Re-resolve stored occurrences against the current catalog. Codes that no
/// longer resolve are left out of the totals. Stored quantities passed
/// `aggregate` at creation, so their sum already fits.
pub fn tally_occurrences(
    occurrences: &[MotionOccurrence],
    catalog: &MotionCatalog,
) -> StudyTotals {
    let mut totals = StudyTotals::default();

    for occurrence in occurrences {
        match catalog.lookup(&occurrence.motion_code) {
            Some(motion) => {
                if totals.add(motion.mod_value, occurrence.quantity).is_none() {
                    crate::log_error!(
                        "Study {} motion count overflowed at position {}",
                        occurrence.study_id,
                        occurrence.sequence_order
                    );
                    break;
                }
            }
            None => {
                crate::log_warn!(
                    "Study {} references unknown motion {} at position {}; skipping",
                    occurrence.study_id,
                    occurrence.motion_code,
                    occurrence.sequence_order
                );
            }
        }
    }

    totals
}
