//! Integration tests for the input masks.

use registration_validator::{mask_national_id, mask_phone, mask_postal_code, MaskedField};

#[test]
fn test_masks_reach_canonical_layout() {
    assert_eq!(mask_national_id("52998224725"), "529.982.247-25");
    assert_eq!(mask_phone("11988887777"), "(11) 9 8888-7777");
    assert_eq!(mask_postal_code("37550000"), "37550-000");
}

#[test]
fn test_masks_are_idempotent_at_full_length() {
    for value in ["11988887777", "35991234567", "99912345678"] {
        let masked = mask_phone(value);
        assert_eq!(mask_phone(&masked), masked);
    }

    let cpf = mask_national_id("11144477735");
    assert_eq!(mask_national_id(&cpf), cpf);

    let cep = mask_postal_code("01310100");
    assert_eq!(mask_postal_code(&cep), cep);
}

#[test]
fn test_typing_one_digit_at_a_time() {
    let typed = "11988887777";
    let mut field = String::new();
    for c in typed.chars() {
        field.push(c);
        field = MaskedField::Phone.on_input(&field);
    }
    assert_eq!(field, "(11) 9 8888-7777");

    let typed = "52998224725";
    let mut field = String::new();
    for c in typed.chars() {
        field.push(c);
        field = MaskedField::NationalId.on_input(&field);
    }
    assert_eq!(field, "529.982.247-25");
}

#[test]
fn test_masks_drop_non_digits() {
    assert_eq!(mask_postal_code("abc"), "");
    assert_eq!(mask_phone("tel: 11 98888 7777"), "(11) 9 8888-7777");
}

#[test]
fn test_masked_phone_passes_validation() {
    let masked = mask_phone("35991234567");
    assert!(registration_validator::validators::validate_phone(&masked).is_valid());
}
