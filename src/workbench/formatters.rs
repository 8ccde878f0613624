use crate::constants::{PERCENTAGE_DECIMALS, WEIGHT_DECIMALS, WEIGHT_UNIT};
use crate::metrics::MaterialShare;

pub fn format_weight(kg: f64) -> String {
    format!("{:.*} {}", WEIGHT_DECIMALS, kg, WEIGHT_UNIT)
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.*}%", PERCENTAGE_DECIMALS, percentage)
}

pub fn format_share(share: &MaterialShare) -> String {
    format!("{}: {}", share.material, format_percentage(share.percentage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(8.0), "8.00 kg");
        assert_eq!(format_weight(0.0), "0.00 kg");
        assert_eq!(format_weight(1.256), "1.26 kg");
    }

    #[test]
    fn test_format_share() {
        let share = MaterialShare {
            material: "Steel".to_string(),
            weight: 3.0,
            percentage: 37.5,
        };
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_share(&share), "Steel: 37.5%");
    }
}
