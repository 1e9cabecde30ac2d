use busconecta_core::payment::PaymentMethod;

use crate::models::{Passenger, Reservation, TripSnapshot};

/// Progress of a single in-memory booking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    SelectingSeats,
    EnteringPassengers,
    Paying,
    Paid,
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("only {limit} seat(s) can be selected")]
    SeatLimitReached { limit: usize },

    #[error("a seat must be selected for every passenger")]
    IncompleteSeatSelection,

    #[error("no passenger at position {0}")]
    NoSuchPassenger(usize),

    #[error("the booking can no longer be edited in the {0:?} state")]
    NotEditable(FlowState),

    #[error("invalid flow transition from {from:?} to {to:?}")]
    InvalidTransition { from: FlowState, to: FlowState },
}

/// In-memory state machine turning a trip selection into a reservation:
/// SelectingSeats → EnteringPassengers → Paying → Paid.
///
/// The seat map is local to this session only; it is never checked against
/// the ledger, so two sessions can book the same seat.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    trip: TripSnapshot,
    state: FlowState,
    passenger_count: usize,
    passengers: Vec<Passenger>,
    seats: Vec<u8>,
    payment_method: PaymentMethod,
}

impl BookingFlow {
    /// A fresh session starts with one unnamed passenger and no seats.
    pub fn new(trip: TripSnapshot) -> Self {
        Self {
            trip,
            state: FlowState::SelectingSeats,
            passenger_count: 1,
            passengers: vec![Passenger::default()],
            seats: Vec::new(),
            payment_method: PaymentMethod::default(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn trip(&self) -> &TripSnapshot {
        &self.trip
    }

    pub fn passenger_count(&self) -> usize {
        self.passenger_count
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn selected_seats(&self) -> &[u8] {
        &self.seats
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) -> Result<(), FlowError> {
        self.ensure_editable()?;
        self.payment_method = method;
        Ok(())
    }

    /// Re-entering the count regenerates a blank passenger list and clears
    /// every selected seat. Destructive on purpose: this is the confirmed
    /// behavior of the form, not a bug to fix. Zero models the cleared
    /// free-text field.
    pub fn set_passenger_count(&mut self, count: usize) -> Result<(), FlowError> {
        self.ensure_editable()?;
        self.passenger_count = count;
        self.passengers = vec![Passenger::default(); count];
        self.seats.clear();
        Ok(())
    }

    /// Deselect an already-selected seat, otherwise select it. Selecting
    /// past one seat per passenger is refused without mutating anything.
    pub fn toggle_seat(&mut self, seat: u8) -> Result<(), FlowError> {
        self.ensure_editable()?;

        if let Some(position) = self.seats.iter().position(|&s| s == seat) {
            self.seats.remove(position);
            return Ok(());
        }

        if self.seats.len() >= self.passenger_count {
            return Err(FlowError::SeatLimitReached {
                limit: self.passenger_count,
            });
        }

        self.seats.push(seat);
        Ok(())
    }

    /// Fill in one traveller's details, paired with a seat by position.
    pub fn set_passenger(
        &mut self,
        index: usize,
        name: &str,
        ticket_number: &str,
    ) -> Result<(), FlowError> {
        self.ensure_editable()?;

        let passenger = self
            .passengers
            .get_mut(index)
            .ok_or(FlowError::NoSuchPassenger(index))?;
        passenger.name = name.to_string();
        passenger.ticket_number = ticket_number.to_string();

        if self.state == FlowState::SelectingSeats {
            self.state = FlowState::EnteringPassengers;
        }
        Ok(())
    }

    /// Gate into payment: exactly one seat per passenger.
    pub fn begin_payment(&mut self) -> Result<(), FlowError> {
        self.ensure_editable()?;

        if self.seats.len() != self.passenger_count {
            return Err(FlowError::IncompleteSeatSelection);
        }

        self.state = FlowState::Paying;
        Ok(())
    }

    /// Drop back to editing when the provider fails.
    pub fn abort_payment(&mut self) {
        if self.state == FlowState::Paying {
            self.state = FlowState::EnteringPassengers;
        }
    }

    /// Assemble the reservation appended to the ledger once the provider
    /// confirms. Only legal while paying.
    pub fn build_reservation(&self, owner: Option<String>) -> Result<Reservation, FlowError> {
        if self.state != FlowState::Paying {
            return Err(FlowError::InvalidTransition {
                from: self.state,
                to: FlowState::Paying,
            });
        }

        Ok(Reservation::new(
            owner,
            self.trip.clone(),
            self.seats.clone(),
            self.passengers.clone(),
        ))
    }

    pub fn mark_paid(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::Paying {
            return Err(FlowError::InvalidTransition {
                from: self.state,
                to: FlowState::Paid,
            });
        }
        self.state = FlowState::Paid;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), FlowError> {
        match self.state {
            FlowState::Paying | FlowState::Paid => Err(FlowError::NotEditable(self.state)),
            FlowState::SelectingSeats | FlowState::EnteringPassengers => Ok(()),
        }
    }
}
