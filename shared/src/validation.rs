//! Validation utilities for the Bazaar Directory platform
//!
//! Includes Turkey-specific phone validation for listing contact numbers.

// ============================================================================
// Listing Validations
// ============================================================================

/// Validate a review rating (1 to 5 stars)
pub fn validate_rating(rating: i32) -> Result<(), &'static str> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err("Rating must be between 1 and 5")
    }
}

/// Validate the year a business was established
pub fn validate_established_year(year: i32) -> Result<(), &'static str> {
    if !(1400..=2100).contains(&year) {
        return Err("Established year out of range");
    }
    Ok(())
}

/// Validate a content-page slug (lowercase alphanumeric and hyphens)
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() || slug.len() > 64 {
        return Err("Slug must be 1-64 characters");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug must be lowercase alphanumeric with hyphens");
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err("Slug cannot start or end with a hyphen");
    }
    Ok(())
}

/// Validate a hex color value like `#d97706`
pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    let hex = color.strip_prefix('#').ok_or("Color must start with #")?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Color must be a 6-digit hex value");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

// ============================================================================
// Turkey-Specific Validations
// ============================================================================

/// Validate a Turkish phone number
/// Accepts: 02125550000, 0212 555 00 00, +902125550000
pub fn validate_turkish_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // National format: 11 digits starting with 0 (e.g., 02125550000)
    if digits.len() == 11 && digits.starts_with('0') {
        return Ok(());
    }
    // Without leading 0: 10 digits (e.g., 2125550000)
    if digits.len() == 10 && !digits.starts_with('0') {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 90
    if digits.len() == 12 && digits.starts_with("90") {
        return Ok(());
    }

    Err("Invalid Turkish phone number format")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn slug_rules() {
        assert!(validate_slug("about-us").is_ok());
        assert!(validate_slug("kapali-carsi").is_ok());
        assert!(validate_slug("About").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn turkish_phone_formats() {
        assert!(validate_turkish_phone("+90 212 555 0000").is_ok());
        assert!(validate_turkish_phone("0212 555 00 00").is_ok());
        assert!(validate_turkish_phone("2125550000").is_ok());
        assert!(validate_turkish_phone("12345").is_err());
    }

    #[test]
    fn hex_colors() {
        assert!(validate_hex_color("#d97706").is_ok());
        assert!(validate_hex_color("d97706").is_err());
        assert!(validate_hex_color("#d977").is_err());
    }
}
