//! Integration tests for the service catalog and user-declared services.

use rakuten_ws::registry::{catalog, ApiMethod, Endpoint, ServiceApi};
use rakuten_ws::{ApplicationId, QueryParams, RakutenWebService, WebServiceConfig};

static SHOP_METHODS: &[ApiMethod] = &[
    ApiMethod::new("search"),
    ApiMethod::aliased("get_detail", "ShopDetail").with_version("20200101"),
];
static SHOP: Endpoint = Endpoint::new("shop", SHOP_METHODS);
static CUSTOM_ENDPOINTS: &[&Endpoint] = &[&SHOP];
static CUSTOM: ServiceApi = ServiceApi::new("ichiba", "20190101", CUSTOM_ENDPOINTS);

fn create_test_client() -> RakutenWebService {
    let config = WebServiceConfig::builder()
        .application_id(ApplicationId::new("app").unwrap())
        .build()
        .unwrap();
    RakutenWebService::new(config)
}

#[test]
fn test_catalog_lists_every_service() {
    let names: Vec<_> = catalog::SERVICES.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec!["ichiba", "books", "travel", "auction", "kobo", "gora", "recipe", "other"]
    );
}

#[test]
fn test_accessors_match_catalog_lookup() {
    let ws = create_test_client();
    assert_eq!(ws.ichiba().descriptor(), ws.api("ichiba").unwrap().descriptor());
    assert_eq!(ws.gora().descriptor().api_version, "20131113");
    assert_eq!(ws.other().descriptor().name, "other");
}

#[test]
fn test_user_declared_service() {
    let ws = create_test_client();
    let shop = ws.service(&CUSTOM).endpoint("shop").unwrap();

    let search = shop.request("search", QueryParams::new()).unwrap();
    assert_eq!(search.endpoint(), "IchibaShop");
    assert_eq!(search.api_version().as_str(), "20190101");

    let detail = shop
        .request("getDetail", [("shop_code", "tea-house")])
        .unwrap()
        .build_url(ws.config())
        .unwrap();
    assert_eq!(
        detail,
        "https://app.rakuten.co.jp/services/api/IchibaShop/ShopDetail/20200101?applicationId=app&formatVersion=2&shopCode=tea-house"
    );
}

#[test]
fn test_recipe_and_other_paths() {
    let ws = create_test_client();

    let ranking = ws
        .recipe()
        .endpoint("category")
        .unwrap()
        .request("ranking", QueryParams::new())
        .unwrap();
    assert_eq!(ranking.endpoint(), "Recipe");

    let shops = ws
        .other()
        .endpoint("high_commission_shop")
        .unwrap()
        .request("list", QueryParams::new())
        .unwrap()
        .build_url(ws.config())
        .unwrap();
    assert!(shops.contains("/HighCommissionShop/List/20131205?"));
}
