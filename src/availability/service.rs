// Availability store
//
// Owns slot CRUD and the containment check booking creation relies on.
// The containment core is pure so the same logic serves both the pool-based
// operation and the transactional path used during booking creation.

use chrono::{DateTime, Datelike, Timelike, Utc};
use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::availability::error::AvailabilityError;
use crate::availability::models::{AvailabilitySlot, CreateSlotRequest};
use crate::availability::repository::AvailabilityRepository;

const SECONDS_PER_DAY: u32 = 86_400;

/// The weekday window a session occupies, in seconds from midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    /// 0 = Sunday through 6 = Saturday
    pub day_of_week: i16,
    pub start_secs: u32,
    pub end_secs: u32,
}

/// Derive the weekday and time-of-day window for a session start instant.
///
/// Instants are stored in UTC and interpreted in UTC; sessions that would
/// run past midnight are rejected rather than truncated.
pub fn session_window(
    start: DateTime<Utc>,
    duration_minutes: u32,
) -> Result<SessionWindow, AvailabilityError> {
    let day_of_week = start.weekday().num_days_from_sunday() as i16;
    let start_secs = start.time().num_seconds_from_midnight();
    // Widen before multiplying so absurd durations fail the midnight check
    // instead of wrapping.
    let end_secs = u64::from(start_secs) + u64::from(duration_minutes) * 60;

    if end_secs >= u64::from(SECONDS_PER_DAY) {
        return Err(AvailabilityError::SessionCrossesMidnight);
    }

    Ok(SessionWindow {
        day_of_week,
        start_secs,
        end_secs: end_secs as u32,
    })
}

/// Returns true iff `[start_secs, end_secs)` is fully contained in the
/// union of the given slots (union semantics: overlapping slots merge).
pub fn covers(slots: &[AvailabilitySlot], start_secs: u32, end_secs: u32) -> bool {
    let mut windows: Vec<(u32, u32)> = slots
        .iter()
        .map(|s| {
            (
                s.start_time.num_seconds_from_midnight(),
                s.end_time.num_seconds_from_midnight(),
            )
        })
        .collect();
    windows.sort_unstable();

    // Sweep forward from the session start; any gap before the session end
    // means the window is not covered.
    let mut covered_to = start_secs;
    for (slot_start, slot_end) in windows {
        if slot_start > covered_to {
            break;
        }
        if slot_end > covered_to {
            covered_to = slot_end;
        }
        if covered_to >= end_secs {
            return true;
        }
    }

    covered_to >= end_secs
}

/// Service owning a coach's recurring weekly open hours
#[derive(Clone)]
pub struct AvailabilityService {
    repo: AvailabilityRepository,
}

impl AvailabilityService {
    /// Create a new AvailabilityService
    pub fn new(repo: AvailabilityRepository) -> Self {
        Self { repo }
    }

    /// Add a slot to a coach's weekly availability
    ///
    /// Overlap with existing slots is allowed; the union of a day's slots
    /// defines the open hours.
    pub async fn add_slot(
        &self,
        coach_id: Uuid,
        request: CreateSlotRequest,
    ) -> Result<AvailabilitySlot, AvailabilityError> {
        if !(0..=6).contains(&request.day_of_week) {
            return Err(AvailabilityError::InvalidDayOfWeek(request.day_of_week));
        }
        if request.start_time >= request.end_time {
            return Err(AvailabilityError::InvalidTimeRange {
                start: request.start_time,
                end: request.end_time,
            });
        }

        let slot = self
            .repo
            .insert(
                coach_id,
                request.day_of_week,
                request.start_time,
                request.end_time,
            )
            .await?;

        tracing::info!(
            "Coach {} added slot {} (day {}, {}-{})",
            coach_id,
            slot.id,
            slot.day_of_week,
            slot.start_time,
            slot.end_time
        );
        Ok(slot)
    }

    /// Remove a slot owned by the coach
    ///
    /// Fails with `SlotNotFound` when the slot does not exist or belongs to
    /// another coach; a second removal of the same slot fails the same way.
    pub async fn remove_slot(&self, coach_id: Uuid, slot_id: Uuid) -> Result<(), AvailabilityError> {
        let deleted = self.repo.delete(coach_id, slot_id).await?;

        if deleted == 0 {
            return Err(AvailabilityError::SlotNotFound);
        }

        tracing::info!("Coach {} removed slot {}", coach_id, slot_id);
        Ok(())
    }

    /// List a coach's slots ordered by (day_of_week, start_time)
    pub async fn list_slots(&self, coach_id: Uuid) -> Result<Vec<AvailabilitySlot>, AvailabilityError> {
        self.repo.list(coach_id).await
    }

    /// Check whether `[start, start+duration)` is fully contained in the
    /// union of the coach's slots for that weekday.
    ///
    /// Runs on the supplied executor so booking creation can evaluate it
    /// inside the same transaction as its conflict check and insert.
    pub async fn is_within_availability<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        coach_id: Uuid,
        start: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<bool, AvailabilityError> {
        let window = session_window(start, duration_minutes)?;
        let slots =
            AvailabilityRepository::slots_for_weekday_on(executor, coach_id, window.day_of_week)
                .await?;

        Ok(covers(&slots, window.start_secs, window.end_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};

    fn slot(start: &str, end: &str) -> AvailabilitySlot {
        AvailabilitySlot {
            id: Uuid::new_v4(),
            coach_id: Uuid::new_v4(),
            day_of_week: 1,
            start_time: start.parse::<NaiveTime>().unwrap(),
            end_time: end.parse::<NaiveTime>().unwrap(),
            created_at: Utc::now(),
        }
    }

    fn secs(t: &str) -> u32 {
        t.parse::<NaiveTime>().unwrap().num_seconds_from_midnight()
    }

    // 2025-06-02 is a Monday.
    fn monday(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, h, m, 0).unwrap()
    }

    #[test]
    fn test_window_inside_single_slot_is_covered() {
        let slots = vec![slot("09:00:00", "17:00:00")];
        assert!(covers(&slots, secs("09:00:00"), secs("10:00:00")));
        assert!(covers(&slots, secs("16:00:00"), secs("17:00:00")));
    }

    #[test]
    fn test_window_matching_slot_exactly_is_covered() {
        let slots = vec![slot("09:00:00", "17:00:00")];
        assert!(covers(&slots, secs("09:00:00"), secs("17:00:00")));
    }

    #[test]
    fn test_window_past_slot_end_by_one_minute_is_not_covered() {
        let slots = vec![slot("09:00:00", "17:00:00")];
        assert!(!covers(&slots, secs("16:31:00"), secs("17:01:00")));
    }

    #[test]
    fn test_window_before_slot_start_is_not_covered() {
        let slots = vec![slot("09:00:00", "17:00:00")];
        assert!(!covers(&slots, secs("08:30:00"), secs("09:30:00")));
    }

    #[test]
    fn test_no_slots_means_not_covered() {
        assert!(!covers(&[], secs("09:00:00"), secs("10:00:00")));
    }

    #[test]
    fn test_union_of_overlapping_slots_covers_window() {
        // 09:00-12:00 and 11:00-17:00 merge into 09:00-17:00.
        let slots = vec![slot("09:00:00", "12:00:00"), slot("11:00:00", "17:00:00")];
        assert!(covers(&slots, secs("10:00:00"), secs("14:00:00")));
    }

    #[test]
    fn test_union_of_touching_slots_covers_window() {
        // Half-open intervals: 09:00-12:00 and 12:00-15:00 leave no gap.
        let slots = vec![slot("09:00:00", "12:00:00"), slot("12:00:00", "15:00:00")];
        assert!(covers(&slots, secs("11:00:00"), secs("13:00:00")));
    }

    #[test]
    fn test_gap_between_slots_is_not_covered() {
        let slots = vec![slot("09:00:00", "12:00:00"), slot("13:00:00", "17:00:00")];
        assert!(!covers(&slots, secs("11:30:00"), secs("13:30:00")));
        assert!(covers(&slots, secs("13:00:00"), secs("14:00:00")));
    }

    #[test]
    fn test_session_window_derives_sunday_zero_weekday() {
        // 2025-06-01 is a Sunday.
        let sunday = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        assert_eq!(session_window(sunday, 60).unwrap().day_of_week, 0);
        assert_eq!(session_window(monday(9, 0), 60).unwrap().day_of_week, 1);
    }

    #[test]
    fn test_session_window_times() {
        let window = session_window(monday(9, 30), 60).unwrap();
        assert_eq!(window.start_secs, secs("09:30:00"));
        assert_eq!(window.end_secs, secs("10:30:00"));
    }

    #[test]
    fn test_session_crossing_midnight_is_rejected() {
        let result = session_window(monday(23, 30), 60);
        assert!(matches!(
            result,
            Err(AvailabilityError::SessionCrossesMidnight)
        ));
    }

    #[test]
    fn test_session_ending_exactly_at_midnight_is_rejected() {
        let result = session_window(monday(23, 0), 60);
        assert!(matches!(
            result,
            Err(AvailabilityError::SessionCrossesMidnight)
        ));
    }

    #[test]
    fn test_oversized_duration_is_rejected_not_wrapped() {
        // u32::MAX * 60 overflows 32 bits; the check must still fire.
        let result = session_window(monday(9, 0), u32::MAX);
        assert!(matches!(
            result,
            Err(AvailabilityError::SessionCrossesMidnight)
        ));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any window inside a single slot is covered.
            #[test]
            fn prop_subwindow_of_slot_is_covered(
                slot_start in 0u32..1000,
                slot_len in 2u32..400,
                offset in 0u32..400,
                len in 1u32..400,
            ) {
                let slot_end = slot_start + slot_len;
                let start = slot_start + offset.min(slot_len - 1);
                let end = (start + len).min(slot_end);
                prop_assume!(start < end);

                let slots = vec![AvailabilitySlot {
                    id: Uuid::new_v4(),
                    coach_id: Uuid::new_v4(),
                    day_of_week: 1,
                    start_time: NaiveTime::from_num_seconds_from_midnight_opt(slot_start * 60, 0).unwrap(),
                    end_time: NaiveTime::from_num_seconds_from_midnight_opt(slot_end.min(1439) * 60, 0).unwrap(),
                    created_at: Utc::now(),
                }];
                let slot_end = slot_end.min(1439);
                prop_assume!(start < slot_end && end <= slot_end);

                prop_assert!(covers(&slots, start * 60, end * 60));
            }

            /// A window extending past every slot is never covered.
            #[test]
            fn prop_window_past_all_slots_is_not_covered(
                slot_start in 0u32..600,
                slot_len in 1u32..400,
                overshoot in 1u32..100,
            ) {
                let slot_end = slot_start + slot_len;
                let slots = vec![AvailabilitySlot {
                    id: Uuid::new_v4(),
                    coach_id: Uuid::new_v4(),
                    day_of_week: 1,
                    start_time: NaiveTime::from_num_seconds_from_midnight_opt(slot_start * 60, 0).unwrap(),
                    end_time: NaiveTime::from_num_seconds_from_midnight_opt(slot_end * 60, 0).unwrap(),
                    created_at: Utc::now(),
                }];

                prop_assert!(!covers(&slots, slot_start * 60, (slot_end + overshoot) * 60));
            }
        }
    }
}
