use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

pub const MIN_PASSENGERS: u8 = 1;
pub const MAX_PASSENGERS: u8 = 20;

#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("'{0}' is not a valid travel date")]
    InvalidDate(String),
    #[error("travel date {date} is before {today}")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("'{0}' is not a valid time")]
    InvalidTime(String),
    #[error("passenger count must be between 1 and 20, got {0}")]
    PassengersOutOfRange(u8),
    #[error("'{0}' is not a valid passenger count")]
    InvalidPassengers(String),
    #[error("unknown service type '{0}'")]
    UnknownService(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceType {
    Shuttle,
    Tours,
    PrivateHire,
    ContractTransport,
    AirportTransfer,
    CustomSolution,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Shuttle,
        ServiceType::Tours,
        ServiceType::PrivateHire,
        ServiceType::ContractTransport,
        ServiceType::AirportTransfer,
        ServiceType::CustomSolution,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Shuttle => "Shuttle Services",
            ServiceType::Tours => "Tours & Sightseeing",
            ServiceType::PrivateHire => "Private Hire",
            ServiceType::ContractTransport => "Contract Transport",
            ServiceType::AirportTransfer => "Airport Transfer",
            ServiceType::CustomSolution => "Custom Solution",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, BookingError> {
        Self::ALL
            .into_iter()
            .find(|service| service.label() == label)
            .ok_or_else(|| BookingError::UnknownService(label.to_string()))
    }
}

pub fn passenger_label(count: u8) -> String {
    if count == 1 {
        "1 Passenger".to_string()
    } else {
        format!("{} Passengers", count)
    }
}

pub fn validate_passengers(count: u8) -> Result<u8, BookingError> {
    if (MIN_PASSENGERS..=MAX_PASSENGERS).contains(&count) {
        Ok(count)
    } else {
        Err(BookingError::PassengersOutOfRange(count))
    }
}

/// Reads the passenger select's value and checks it against the allowed range.
pub fn parse_passengers(value: &str) -> Result<u8, BookingError> {
    let count = value
        .trim()
        .parse::<u8>()
        .map_err(|_| BookingError::InvalidPassengers(value.to_string()))?;
    validate_passengers(count)
}

/// Value for the date input's `min` attribute.
pub fn min_travel_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` input value and rejects anything before `today`.
pub fn validate_travel_date(value: &str, today: NaiveDate) -> Result<NaiveDate, BookingError> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(value.to_string()))?;
    if date < today {
        return Err(BookingError::DateInPast { date, today });
    }
    Ok(date)
}

/// Parses an `HH:MM` input value.
pub fn validate_travel_time(value: &str) -> Result<NaiveTime, BookingError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| BookingError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_dates_are_rejected() {
        let today = day(2026, 10, 18);
        assert_eq!(
            validate_travel_date("2026-10-17", today),
            Err(BookingError::DateInPast { date: day(2026, 10, 17), today })
        );
    }

    #[test]
    fn today_and_later_are_accepted() {
        let today = day(2026, 10, 18);
        assert_eq!(validate_travel_date("2026-10-18", today), Ok(today));
        assert_eq!(validate_travel_date("2027-01-02", today), Ok(day(2027, 1, 2)));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let today = day(2026, 10, 18);
        assert!(matches!(validate_travel_date("", today), Err(BookingError::InvalidDate(_))));
        assert!(matches!(validate_travel_date("18/10/2026", today), Err(BookingError::InvalidDate(_))));
    }

    #[test]
    fn min_date_matches_input_format() {
        assert_eq!(min_travel_date(day(2026, 3, 7)), "2026-03-07");
    }

    #[test]
    fn time_parsing() {
        assert!(validate_travel_time("07:30").is_ok());
        assert!(matches!(validate_travel_time("25:00"), Err(BookingError::InvalidTime(_))));
    }

    #[test]
    fn passenger_bounds() {
        assert_eq!(validate_passengers(1), Ok(1));
        assert_eq!(validate_passengers(20), Ok(20));
        assert_eq!(validate_passengers(0), Err(BookingError::PassengersOutOfRange(0)));
        assert_eq!(validate_passengers(21), Err(BookingError::PassengersOutOfRange(21)));
    }

    #[test]
    fn unreadable_passenger_value_is_reported_as_given() {
        assert_eq!(parse_passengers("7"), Ok(7));
        assert_eq!(parse_passengers("21"), Err(BookingError::PassengersOutOfRange(21)));
        assert_eq!(
            parse_passengers("many"),
            Err(BookingError::InvalidPassengers("many".to_string()))
        );
        assert_eq!(
            BookingError::InvalidPassengers("".to_string()).to_string(),
            "'' is not a valid passenger count"
        );
    }

    #[test]
    fn passenger_labels() {
        assert_eq!(passenger_label(1), "1 Passenger");
        assert_eq!(passenger_label(12), "12 Passengers");
    }

    #[test]
    fn service_labels_round_trip_through_select_values() {
        assert_eq!(ServiceType::from_label("Airport Transfer"), Ok(ServiceType::AirportTransfer));
        assert_eq!(
            ServiceType::from_label("Helicopter"),
            Err(BookingError::UnknownService("Helicopter".to_string()))
        );
    }

    #[test]
    fn error_messages_read_naturally() {
        let err = BookingError::DateInPast { date: day(2026, 1, 1), today: day(2026, 2, 1) };
        assert_eq!(err.to_string(), "travel date 2026-01-01 is before 2026-02-01");
    }
}
