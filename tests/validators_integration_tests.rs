use fieldcheck::{
    check_latitude, check_longitude, is_rational_number, valid_email, valid_phone, valid_username,
    FieldKind,
};
use serde_json::json;

#[test]
fn test_username_accepts_builtin_email_and_phone() {
    assert!(valid_username("admin"));
    assert!(valid_username("  admin  "));
    assert!(valid_username("user@example.com"));
    assert!(valid_username("+8613812345678"));
    assert!(!valid_username("not-an-email"));
    assert!(!valid_username("root"));
}

#[test]
fn test_phone_numbers() {
    let accepted = ["13812345678", "+8613812345678", "08613812345678", "15912345678"];
    for phone in accepted {
        assert!(valid_phone(phone), "Should accept phone: {}", phone);
    }

    let rejected = ["23812345678", "11012345678", "1381234567", "+8723812345678", "phone"];
    for phone in rejected {
        assert!(!valid_phone(phone), "Should reject phone: {}", phone);
    }
}

#[test]
fn test_email_addresses() {
    assert!(valid_email("a.b@sub.example.com"));
    assert!(!valid_email("a@b"));
    assert!(!valid_email(""));
}

#[test]
fn test_rational_numbers() {
    assert!(is_rational_number("12.5"));
    assert!(is_rational_number("12"));
    assert!(!is_rational_number("-1"));
}

#[test]
fn test_longitude_bounds() {
    assert!(check_longitude("179.999999"));
    assert!(check_longitude("180"));
    assert!(!check_longitude("181"));
    assert!(check_longitude(-180));
    assert!(check_longitude(-180.0_f64));
    assert!(!check_longitude(-180.5_f64));
}

#[test]
fn test_latitude_bounds() {
    assert!(check_latitude("89.5"));
    assert!(check_latitude("90"));
    assert!(!check_latitude("90.1"));
    assert!(check_latitude(-90));
}

#[test]
fn test_json_payload_values() {
    let form = json!({
        "phone": 13812345678_u64,
        "lng": 116.397128,
        "lat": "39.909604",
        "price": 12.0,
        "bad_lat": 91,
        "flag": true,
    });

    assert!(valid_phone(&form["phone"]));
    assert!(check_longitude(&form["lng"]));
    assert!(check_latitude(&form["lat"]));
    assert!(is_rational_number(&form["price"]));
    assert!(!check_latitude(&form["bad_lat"]));
    assert!(!is_rational_number(&form["flag"]));
    assert!(!valid_phone(&form["missing"]));
}

#[test]
fn test_kinds_agree_with_functions() {
    let samples = ["admin", "13812345678", "a.b@sub.example.com", "12.5", "-180", "90.1", ""];
    for sample in samples {
        assert_eq!(FieldKind::Username.check(sample), valid_username(sample));
        assert_eq!(FieldKind::Phone.check(sample), valid_phone(sample));
        assert_eq!(FieldKind::Email.check(sample), valid_email(sample));
        assert_eq!(FieldKind::Rational.check(sample), is_rational_number(sample));
        assert_eq!(FieldKind::Longitude.check(sample), check_longitude(sample));
        assert_eq!(FieldKind::Latitude.check(sample), check_latitude(sample));
    }
}

#[test]
fn test_validators_are_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let lat = format!("{}.5", 10 * i);
                check_latitude(lat.as_str()) && valid_phone("13812345678")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}
