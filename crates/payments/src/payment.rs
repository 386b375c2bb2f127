use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pizzashop_core::{DomainError, DomainResult, ValueObject};

/// Field separator of the payment log.
pub const FIELD_SEPARATOR: char = ',';

/// How a table settled its bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Cash,
    Card,
}

impl PaymentType {
    pub const ALL: [PaymentType; 2] = [PaymentType::Cash, PaymentType::Card];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Cash => "CASH",
            PaymentType::Card => "CARD",
        }
    }
}

impl core::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH" => Ok(PaymentType::Cash),
            "CARD" => Ok(PaymentType::Card),
            other => Err(DomainError::malformed(format!("unknown payment type '{other}'"))),
        }
    }
}

/// A recorded payment: table, payment type and amount.
///
/// Construction does not validate; range checks are applied by the service
/// before a payment is recorded (see [`crate::rules`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    table_number: i32,
    payment_type: PaymentType,
    amount: Decimal,
}

impl ValueObject for Payment {}

impl Payment {
    pub fn new(table_number: i32, payment_type: PaymentType, amount: Decimal) -> Self {
        Self {
            table_number,
            payment_type,
            amount,
        }
    }

    pub fn table_number(&self) -> i32 {
        self.table_number
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Parse one line of the payment log (`table,TYPE,amount`).
    ///
    /// Blank lines yield `Ok(None)`.
    pub fn parse_record(line: &str) -> DomainResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        let [table, payment_type, amount] = fields.as_slice() else {
            return Err(DomainError::malformed(format!(
                "payment record '{line}' must have 3 fields, found {}",
                fields.len()
            )));
        };

        let table_number = table
            .parse::<i32>()
            .map_err(|e| DomainError::malformed(format!("table number '{table}': {e}")))?;
        let payment_type = payment_type.parse::<PaymentType>()?;
        let amount = Decimal::from_str(amount)
            .map_err(|e| DomainError::malformed(format!("payment amount '{amount}': {e}")))?;

        Ok(Some(Self::new(table_number, payment_type, amount)))
    }
}

impl core::fmt::Display for Payment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.table_number,
            self.payment_type,
            self.amount,
            sep = FIELD_SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn record_format_is_table_type_amount() {
        let payment = Payment::new(1, PaymentType::Cash, dec("100.0"));
        assert_eq!(payment.to_string(), "1,CASH,100.0");
    }

    #[test]
    fn parses_record_line() {
        let payment = Payment::parse_record("3,CARD,20.35\n").unwrap().unwrap();
        assert_eq!(payment.table_number(), 3);
        assert_eq!(payment.payment_type(), PaymentType::Card);
        assert_eq!(payment.amount(), dec("20.35"));
    }

    #[test]
    fn blank_record_is_skipped() {
        assert_eq!(Payment::parse_record("  ").unwrap(), None);
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = Payment::parse_record("1,CASH").unwrap_err();
        assert!(matches!(err, DomainError::Malformed(msg) if msg.contains("3 fields")));
        assert!(Payment::parse_record("1,CASH,5,extra").is_err());
    }

    #[test]
    fn unknown_payment_type_is_malformed() {
        let err = Payment::parse_record("1,VOUCHER,5").unwrap_err();
        assert!(matches!(err, DomainError::Malformed(msg) if msg.contains("VOUCHER")));
    }

    #[test]
    fn bad_numbers_are_malformed() {
        assert!(Payment::parse_record("one,CASH,5").is_err());
        assert!(Payment::parse_record("1,CASH,five").is_err());
    }

    #[test]
    fn parse_does_not_apply_business_rules() {
        // Range checks belong to the service; the log may hold anything it wrote.
        let payment = Payment::parse_record("0,CARD,12").unwrap().unwrap();
        assert_eq!(payment.table_number(), 0);
    }

    #[test]
    fn payment_type_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&PaymentType::Card).unwrap(), "\"CARD\"");
        let parsed: PaymentType = serde_json::from_str("\"CASH\"").unwrap();
        assert_eq!(parsed, PaymentType::Cash);
    }
}
