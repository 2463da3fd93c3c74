use super::*;

const NOW: &str = "2024-05-01T12:00:00Z";

// =============================================================================
// User
// =============================================================================

#[test]
fn user_from_draft_generates_id_and_profile_slug() {
    let draft = UserDraft {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        ..UserDraft::default()
    };
    let user = User::from_draft(draft, NOW);
    assert_eq!(user.id.len(), 36);
    assert_eq!(user.profile_url, format!("user_{}", &user.id[..8]));
    assert_eq!(user.created_at, NOW);
}

#[test]
fn user_from_draft_forces_logged_in() {
    let user = User::from_draft(UserDraft::default(), NOW);
    assert!(user.is_logged_in);
}

#[test]
fn user_from_draft_keeps_overrides() {
    let draft = UserDraft {
        id: Some("u-1".to_owned()),
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        profile_url: Some("user_custom".to_owned()),
        created_at: Some("2020-01-01T00:00:00Z".to_owned()),
    };
    let user = User::from_draft(draft, NOW);
    assert_eq!(user.id, "u-1");
    assert_eq!(user.profile_url, "user_custom");
    assert_eq!(user.created_at, "2020-01-01T00:00:00Z");
}

#[test]
fn user_serializes_logged_in_flag_camel_case() {
    let user = User::from_draft(UserDraft::default(), NOW);
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["isLoggedIn"], true);
    assert!(json.get("is_logged_in").is_none());
}

// =============================================================================
// Product
// =============================================================================

fn shoe_draft() -> ProductDraft {
    ProductDraft {
        name: "Shoe".to_owned(),
        price: 100.0,
        ..ProductDraft::default()
    }
}

#[test]
fn product_from_draft_fills_defaults() {
    let product = Product::from_draft(shoe_draft(), "u-1", NOW);
    assert_eq!(product.id.len(), 36);
    assert_eq!(product.user_id, "u-1");
    assert!((product.current_price - 100.0).abs() < f64::EPSILON);
    assert_eq!(product.old_price, None);
    assert_eq!(product.images, Vec::<String>::new());
    assert_eq!(product.created_at, NOW);
}

#[test]
fn product_images_default_from_image() {
    let draft = ProductDraft { image: Some("a.jpg".to_owned()), ..shoe_draft() };
    let product = Product::from_draft(draft, "u-1", NOW);
    assert_eq!(product.images, vec!["a.jpg".to_owned()]);
}

#[test]
fn product_explicit_images_win_over_image() {
    let draft = ProductDraft {
        image: Some("a.jpg".to_owned()),
        images: Some(vec!["b.jpg".to_owned(), "c.jpg".to_owned()]),
        ..shoe_draft()
    };
    let product = Product::from_draft(draft, "u-1", NOW);
    assert_eq!(product.images, vec!["b.jpg".to_owned(), "c.jpg".to_owned()]);
}

#[test]
fn product_explicit_current_price_wins() {
    let draft = ProductDraft { current_price: Some(80.0), ..shoe_draft() };
    let product = Product::from_draft(draft, "u-1", NOW);
    assert!((product.current_price - 80.0).abs() < f64::EPSILON);
    assert!((product.price - 100.0).abs() < f64::EPSILON);
}

#[test]
fn product_deserializes_without_images_field() {
    let json = r#"{
        "id": "p-1", "user_id": "u-1", "name": "Shoe", "price": 100.0,
        "image": null, "brand": null, "url": null, "old_price": null,
        "current_price": 100.0, "discount_percentage": null,
        "discount_info": null, "created_at": "2024-05-01T12:00:00Z"
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert!(product.images.is_empty());
}

#[test]
fn product_serde_round_trip() {
    let draft = ProductDraft {
        image: Some("a.jpg".to_owned()),
        brand: Some("Acme".to_owned()),
        url: Some("https://example.com/shoe".to_owned()),
        old_price: Some(120.0),
        discount_percentage: Some(16.7),
        discount_info: Some("spring sale".to_owned()),
        ..shoe_draft()
    };
    let product = Product::from_draft(draft, "u-1", NOW);
    let json = serde_json::to_string(&product).unwrap();
    let restored: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, product);
}

// =============================================================================
// Collection
// =============================================================================

#[test]
fn collection_from_draft_fills_defaults() {
    let draft = CollectionDraft { name: "Wishlist".to_owned(), ..CollectionDraft::default() };
    let collection = Collection::from_draft(draft, "u-1", NOW);
    assert_eq!(collection.user_id, "u-1");
    assert_eq!(collection.description, "");
    assert_eq!(collection.kind, "favorites");
    assert!(collection.is_public);
    assert_eq!(collection.share_url, format!("collection_{}", &collection.id[..8]));
    assert!(collection.products.is_empty());
}

#[test]
fn collection_kind_serializes_as_type() {
    let draft = CollectionDraft { name: "Tech".to_owned(), kind: Some("gadgets".to_owned()), ..CollectionDraft::default() };
    let collection = Collection::from_draft(draft, "u-1", NOW);
    let json = serde_json::to_value(&collection).unwrap();
    assert_eq!(json["type"], "gadgets");
    assert!(json.get("kind").is_none());
}

#[test]
fn collection_deserializes_without_products_field() {
    let json = r#"{
        "id": "c-1", "user_id": "u-1", "name": "Old", "description": "",
        "type": "favorites", "is_public": true, "share_url": "collection_c",
        "created_at": "2024-05-01T12:00:00Z"
    }"#;
    let collection: Collection = serde_json::from_str(json).unwrap();
    assert!(collection.products.is_empty());
}

#[test]
fn collection_private_override() {
    let draft = CollectionDraft { name: "Secret".to_owned(), is_public: Some(false), ..CollectionDraft::default() };
    let collection = Collection::from_draft(draft, "u-1", NOW);
    assert!(!collection.is_public);
}

// =============================================================================
// PriceTracking
// =============================================================================

fn watch_draft() -> TrackingDraft {
    TrackingDraft {
        product_id: "p-1".to_owned(),
        current_price: 50.0,
        ..TrackingDraft::default()
    }
}

#[test]
fn tracking_from_draft_fills_defaults() {
    let tracking = PriceTracking::from_draft(watch_draft(), "u-1", NOW);
    assert_eq!(tracking.user_id, "u-1");
    assert!((tracking.original_price - 50.0).abs() < f64::EPSILON);
    assert!(tracking.price_change.abs() < f64::EPSILON);
    assert!(tracking.is_active);
    assert_eq!(tracking.alert_price, None);
    assert_eq!(tracking.created_at, NOW);
    assert_eq!(tracking.last_checked, NOW);
}

#[test]
fn tracking_explicit_original_price_wins() {
    let draft = TrackingDraft { original_price: Some(80.0), ..watch_draft() };
    let tracking = PriceTracking::from_draft(draft, "u-1", NOW);
    assert!((tracking.original_price - 80.0).abs() < f64::EPSILON);
}

#[test]
fn tracking_deserializes_without_price_change() {
    let json = r#"{
        "id": "t-1", "product_id": "p-1", "user_id": "u-1",
        "current_price": 50.0, "original_price": 50.0, "is_active": true,
        "alert_price": null, "created_at": "2024-05-01T12:00:00Z",
        "last_checked": "2024-05-01T12:00:00Z"
    }"#;
    let tracking: PriceTracking = serde_json::from_str(json).unwrap();
    assert!(tracking.price_change.abs() < f64::EPSILON);
}
