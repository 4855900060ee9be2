//! Input validation utilities

use crate::constants;

/// Validate a skill listing type
pub fn validate_skill_type(skill_type: &str) -> Result<(), &'static str> {
    if constants::skill_types::ALL.contains(&skill_type) {
        Ok(())
    } else {
        Err("Skill type must be 'offered' or 'wanted'")
    }
}

/// Validate a skill proficiency level
pub fn validate_skill_level(level: &str) -> Result<(), &'static str> {
    if constants::skill_levels::ALL.contains(&level) {
        Ok(())
    } else {
        Err("Level must be 'beginner', 'intermediate', or 'advanced'")
    }
}

/// Validate an availability day of week (0 = Sunday through 6)
pub fn validate_day_of_week(day: i64) -> Result<(), &'static str> {
    if (0..=6).contains(&day) {
        Ok(())
    } else {
        Err("Day of week must be between 0 and 6")
    }
}

/// Validate a time-of-day string in HH:MM form
pub fn validate_time_of_day(time: &str) -> Result<(), &'static str> {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err("Time must be in HH:MM format");
    }

    let hours: u32 = time[..2].parse().map_err(|_| "Time must be in HH:MM format")?;
    let minutes: u32 = time[3..].parse().map_err(|_| "Time must be in HH:MM format")?;

    if hours > 23 || minutes > 59 {
        return Err("Time must be a valid 24-hour clock value");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_skill_type() {
        assert!(validate_skill_type("offered").is_ok());
        assert!(validate_skill_type("wanted").is_ok());
        assert!(validate_skill_type("both").is_err());
        assert!(validate_skill_type("").is_err());
    }

    #[test]
    fn test_validate_skill_level() {
        assert!(validate_skill_level("beginner").is_ok());
        assert!(validate_skill_level("intermediate").is_ok());
        assert!(validate_skill_level("advanced").is_ok());
        assert!(validate_skill_level("expert").is_err());
    }

    #[test]
    fn test_validate_day_of_week() {
        assert!(validate_day_of_week(0).is_ok());
        assert!(validate_day_of_week(6).is_ok());
        assert!(validate_day_of_week(7).is_err());
        assert!(validate_day_of_week(-1).is_err());
    }

    #[test]
    fn test_validate_time_of_day() {
        assert!(validate_time_of_day("09:00").is_ok());
        assert!(validate_time_of_day("23:59").is_ok());
        assert!(validate_time_of_day("24:00").is_err());
        assert!(validate_time_of_day("9:00").is_err());
        assert!(validate_time_of_day("0900").is_err());
    }
}
