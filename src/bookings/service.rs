// Booking workflow
//
// Creation runs as a single transaction under the per-coach advisory lock:
// every check and the insert see one consistent view, and two clients
// racing for the same coach serialize instead of double-booking.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{AccessGuard, AuthError, Profile, Role};
use crate::availability::AvailabilityService;
use crate::bookings::conflict::ConflictResolver;
use crate::bookings::error::BookingError;
use crate::bookings::models::{Booking, BookingStatus, CreateBookingRequest, SessionDuration};
use crate::bookings::price_calculator::PriceCalculator;
use crate::bookings::repository::BookingRepository;
use crate::bookings::status_machine::StatusMachine;
use crate::coaches::CoachRepository;
use crate::db;

/// Collapse an ownership failure into `NotFound` so a booking owned by
/// someone else is indistinguishable from a missing one. Role failures
/// pass through; they depend only on the caller and are checked before
/// any row is fetched.
fn conceal_ownership(err: AuthError) -> BookingError {
    match err {
        AuthError::NotResourceOwner => BookingError::NotFound,
        other => BookingError::Auth(other),
    }
}

/// Service for booking creation, status transitions, and listing
#[derive(Clone)]
pub struct BookingService {
    pool: PgPool,
    repo: BookingRepository,
    availability: AvailabilityService,
}

impl BookingService {
    /// Create a new BookingService
    pub fn new(pool: PgPool, repo: BookingRepository, availability: AvailabilityService) -> Self {
        Self {
            pool,
            repo,
            availability,
        }
    }

    /// Create a pending booking for the calling client.
    ///
    /// Checks run in order: duration menu, session in the future, coach
    /// exists, window inside the coach's weekly availability, window free
    /// of active bookings. The price is snapshotted from the coach's
    /// current hourly rate; a coach without a rate yields a priceless
    /// booking rather than a rejection.
    pub async fn create_booking(
        &self,
        caller: &Profile,
        request: CreateBookingRequest,
    ) -> Result<Booking, BookingError> {
        AccessGuard::authorize(caller, Role::Client, None)?;

        let duration = SessionDuration::try_from(request.duration)
            .map_err(BookingError::UnsupportedDuration)?;

        if request.session_date <= Utc::now() {
            return Err(BookingError::SessionInPast);
        }

        let session_end = request.session_date + Duration::minutes(duration.minutes() as i64);

        let mut tx = self.pool.begin().await?;
        db::lock_coach(&mut *tx, request.coach_id).await?;

        let coach = CoachRepository::find_by_user_id_on(&mut *tx, request.coach_id)
            .await?
            .ok_or(BookingError::CoachNotFound)?;

        let within = self
            .availability
            .is_within_availability(
                &mut *tx,
                request.coach_id,
                request.session_date,
                duration.minutes() as u32,
            )
            .await?;
        if !within {
            return Err(BookingError::OutsideAvailability);
        }

        if ConflictResolver::has_conflict(
            &mut *tx,
            request.coach_id,
            request.session_date,
            session_end,
            None,
        )
        .await?
        {
            return Err(BookingError::TimeSlotConflict);
        }

        let price = PriceCalculator::quote(coach.hourly_rate, duration.minutes());

        let booking = BookingRepository::insert_on(
            &mut *tx,
            caller.id,
            request.coach_id,
            request.session_date,
            duration.minutes(),
            price,
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Client {} booked coach {} for {} ({} min, booking {})",
            caller.id,
            booking.coach_id,
            booking.session_date,
            booking.duration,
            booking.id
        );
        Ok(booking)
    }

    /// Transition a booking to a new status.
    ///
    /// Confirm and complete belong to the owning coach; either party may
    /// cancel. Role checks run before the row fetch and ownership failures
    /// surface as `NotFound`, so the response never reveals whether a
    /// booking the caller does not own exists. The row is locked for the
    /// duration of the transaction so concurrent transitions serialize,
    /// and completion is refused until the session has actually started.
    pub async fn update_status(
        &self,
        caller: &Profile,
        booking_id: Uuid,
        new_status: BookingStatus,
    ) -> Result<Booking, BookingError> {
        match new_status {
            BookingStatus::Confirmed | BookingStatus::Completed => {
                AccessGuard::authorize(caller, Role::Coach, None)?;
            }
            BookingStatus::Cancelled | BookingStatus::Pending => {
                AccessGuard::require_role(caller)?;
            }
        }

        let mut tx = self.pool.begin().await?;

        let booking = BookingRepository::find_for_update_on(&mut *tx, booking_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        let party_check = match new_status {
            BookingStatus::Confirmed | BookingStatus::Completed => {
                AccessGuard::authorize(caller, Role::Coach, Some(booking.coach_id))
            }
            BookingStatus::Cancelled | BookingStatus::Pending => {
                AccessGuard::authorize_party(caller, &[booking.client_id, booking.coach_id])
            }
        };
        party_check.map_err(conceal_ownership)?;

        let next = StatusMachine::transition(booking.status, new_status)
            .map_err(BookingError::InvalidTransition)?;

        if next == BookingStatus::Completed && booking.session_date > Utc::now() {
            return Err(BookingError::SessionNotStarted);
        }

        let updated = BookingRepository::update_status_on(&mut *tx, booking_id, next).await?;
        tx.commit().await?;

        tracing::info!(
            "Booking {} moved from {} to {} by {}",
            booking_id,
            booking.status,
            updated.status,
            caller.id
        );
        Ok(updated)
    }

    /// List the caller's bookings as either party.
    ///
    /// The requested role must match the caller's actual role; a coach
    /// asking for a client's view (or vice versa) is rejected rather than
    /// silently returning an empty list.
    pub async fn list_bookings(
        &self,
        caller: &Profile,
        role: Role,
    ) -> Result<Vec<Booking>, BookingError> {
        AccessGuard::authorize(caller, role, None)?;

        let bookings = match role {
            Role::Client => self.repo.list_for_client(caller.id).await?,
            Role::Coach => self.repo.list_for_coach(caller.id).await?,
        };

        Ok(bookings)
    }

    /// Fetch a single booking, visible only to its two parties.
    ///
    /// A booking belonging to other parties answers `NotFound`, exactly
    /// like an id that was never issued.
    pub async fn get_booking(
        &self,
        caller: &Profile,
        booking_id: Uuid,
    ) -> Result<Booking, BookingError> {
        AccessGuard::require_role(caller)?;

        let booking = self
            .repo
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        AccessGuard::authorize_party(caller, &[booking.client_id, booking.coach_id])
            .map_err(conceal_ownership)?;

        Ok(booking)
    }
}
