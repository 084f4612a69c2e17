//! Next-maintenance-date calculation.
//!
//! A maintenance event schedules a follow-up only when it is an actual
//! maintenance action: extraction events (those carrying a removal reason)
//! and events whose type has no recommended frequency produce no follow-up.

use chrono::NaiveDate;

/// Compute the date the next maintenance is due.
///
/// Returns `None` when the event carries a removal reason, when the
/// maintenance type has no recommended frequency, or when the addition
/// would overflow the calendar range.
///
/// Plain calendar-day arithmetic, no timezone involved:
/// 2024-01-01 with a 180-day frequency is due again on 2024-06-29.
pub fn proximo_mantenimiento(
    fecha: NaiveDate,
    frecuencia_dias: Option<i64>,
    tiene_motivo_extraccion: bool,
) -> Option<NaiveDate> {
    if tiene_motivo_extraccion {
        return None;
    }
    let dias = frecuencia_dias?;
    fecha.checked_add_signed(chrono::Duration::try_days(dias)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn poda_cada_180_dias() {
        let next = proximo_mantenimiento(date(2024, 1, 1), Some(180), false);
        assert_eq!(next, Some(date(2024, 6, 29)));
    }

    #[test]
    fn riego_semanal() {
        let next = proximo_mantenimiento(date(2024, 2, 26), Some(7), false);
        assert_eq!(next, Some(date(2024, 3, 4)));
    }

    #[test]
    fn cruza_fin_de_anio() {
        let next = proximo_mantenimiento(date(2023, 12, 20), Some(15), false);
        assert_eq!(next, Some(date(2024, 1, 4)));
    }

    #[test]
    fn extraccion_no_programa_seguimiento() {
        // Even with a frequency present, a removal reason wins.
        let next = proximo_mantenimiento(date(2024, 1, 1), Some(180), true);
        assert_eq!(next, None);
    }

    #[test]
    fn tipo_sin_frecuencia_no_programa() {
        let next = proximo_mantenimiento(date(2024, 1, 1), None, false);
        assert_eq!(next, None);
    }
}
