//! Built-in Rakuten Web Service catalog.
//!
//! Each service is a `static` [`ServiceApi`]; [`SERVICES`] lists them all and
//! [`find`] looks one up by name.

use super::{clean_name, ApiMethod, Endpoint, ServiceApi};

const SEARCH: &[ApiMethod] = &[ApiMethod::new("search")];

// Ichiba

static ICHIBA_ITEM_METHODS: &[ApiMethod] = &[
    ApiMethod::new("search"),
    ApiMethod::new("ranking").with_version("20170628"),
];
static ICHIBA_PRODUCT_METHODS: &[ApiMethod] = &[ApiMethod::new("search").with_version("20170426")];

static ICHIBA_ITEM: Endpoint = Endpoint::new("item", ICHIBA_ITEM_METHODS);
static ICHIBA_GENRE: Endpoint = Endpoint::new("genre", SEARCH);
static ICHIBA_TAG: Endpoint = Endpoint::new("tag", SEARCH);
static ICHIBA_PRODUCT: Endpoint = Endpoint::with_path("product", "Product", ICHIBA_PRODUCT_METHODS);

static ICHIBA_ENDPOINTS: &[&Endpoint] = &[&ICHIBA_ITEM, &ICHIBA_GENRE, &ICHIBA_TAG, &ICHIBA_PRODUCT];

/// Rakuten Ichiba (marketplace) items, genres, tags and products.
pub static ICHIBA: ServiceApi = ServiceApi::new("ichiba", "20140222", ICHIBA_ENDPOINTS);

// Books

static BOOKS_GENRE_METHODS: &[ApiMethod] = &[ApiMethod::new("search").with_version("20121128")];

static BOOKS_TOTAL: Endpoint = Endpoint::new("total", SEARCH);
static BOOKS_BOOK: Endpoint = Endpoint::new("book", SEARCH);
static BOOKS_CD: Endpoint = Endpoint::with_path("cd", "BooksCD", SEARCH);
static BOOKS_DVD: Endpoint = Endpoint::with_path("dvd", "BooksDVD", SEARCH);
static BOOKS_FOREIGN_BOOK: Endpoint = Endpoint::new("foreign_book", SEARCH);
static BOOKS_MAGAZINE: Endpoint = Endpoint::new("magazine", SEARCH);
static BOOKS_GAME: Endpoint = Endpoint::new("game", SEARCH);
static BOOKS_SOFTWARE: Endpoint = Endpoint::new("software", SEARCH);
static BOOKS_GENRE: Endpoint = Endpoint::new("genre", BOOKS_GENRE_METHODS);

static BOOKS_ENDPOINTS: &[&Endpoint] = &[
    &BOOKS_TOTAL,
    &BOOKS_BOOK,
    &BOOKS_CD,
    &BOOKS_DVD,
    &BOOKS_FOREIGN_BOOK,
    &BOOKS_MAGAZINE,
    &BOOKS_GAME,
    &BOOKS_SOFTWARE,
    &BOOKS_GENRE,
];

/// Rakuten Books catalog search.
pub static BOOKS: ServiceApi = ServiceApi::new("books", "20130522", BOOKS_ENDPOINTS);

// Travel

static TRAVEL_HOTEL_METHODS: &[ApiMethod] = &[
    ApiMethod::aliased("simple_search", "SimpleHotelSearch"),
    ApiMethod::aliased("detail_search", "HotelDetailSearch"),
    ApiMethod::aliased("search_vacant", "VacantHotelSearch"),
    ApiMethod::aliased("ranking", "HotelRanking"),
    ApiMethod::aliased("get_chain_list", "GetHotelChainList"),
    ApiMethod::aliased("keyword_search", "KeywordHotelSearch"),
];
static TRAVEL_AREA_METHODS: &[ApiMethod] = &[ApiMethod::aliased("get_class", "GetAreaClass")];

static TRAVEL_HOTEL: Endpoint = Endpoint::with_path("hotel", "Travel", TRAVEL_HOTEL_METHODS);
static TRAVEL_AREA: Endpoint = Endpoint::with_path("area", "Travel", TRAVEL_AREA_METHODS);

static TRAVEL_ENDPOINTS: &[&Endpoint] = &[&TRAVEL_HOTEL, &TRAVEL_AREA];

/// Rakuten Travel hotel and area search.
pub static TRAVEL: ServiceApi = ServiceApi::new("travel", "20131024", TRAVEL_ENDPOINTS);

// Auction

static AUCTION_ITEM_METHODS: &[ApiMethod] = &[ApiMethod::new("search").with_version("20130905")];

static AUCTION_ITEM: Endpoint = Endpoint::new("item", AUCTION_ITEM_METHODS);
static AUCTION_ITEM_CODE: Endpoint = Endpoint::new("item_code", SEARCH);
static AUCTION_GENRE_ID: Endpoint = Endpoint::new("genre_id", SEARCH);
static AUCTION_GENRE_KEYWORD: Endpoint = Endpoint::new("genre_keyword", SEARCH);

static AUCTION_ENDPOINTS: &[&Endpoint] = &[
    &AUCTION_ITEM,
    &AUCTION_ITEM_CODE,
    &AUCTION_GENRE_ID,
    &AUCTION_GENRE_KEYWORD,
];

/// Rakuten Auction items and genres.
pub static AUCTION: ServiceApi = ServiceApi::new("auction", "20120927", AUCTION_ENDPOINTS);

// Kobo

static KOBO_EBOOK_METHODS: &[ApiMethod] = &[ApiMethod::new("search").with_version("20140811")];

static KOBO_EBOOK: Endpoint = Endpoint::new("ebook", KOBO_EBOOK_METHODS);
static KOBO_GENRE: Endpoint = Endpoint::new("genre", SEARCH);

static KOBO_ENDPOINTS: &[&Endpoint] = &[&KOBO_EBOOK, &KOBO_GENRE];

/// Rakuten Kobo e-books.
pub static KOBO: ServiceApi = ServiceApi::new("kobo", "20131010", KOBO_ENDPOINTS);

// Gora

static GORA_PLAN_METHODS: &[ApiMethod] = &[ApiMethod::new("search").with_version("20150706")];

static GORA_COURSE: Endpoint = Endpoint::with_path("course", "GoraGolfCourse", SEARCH);
static GORA_COURSE_DETAIL: Endpoint =
    Endpoint::with_path("course_detail", "GoraGolfCourseDetail", SEARCH);
static GORA_PLAN: Endpoint = Endpoint::new("plan", GORA_PLAN_METHODS);

static GORA_ENDPOINTS: &[&Endpoint] = &[&GORA_COURSE, &GORA_COURSE_DETAIL, &GORA_PLAN];

/// Rakuten GORA golf courses and plans.
pub static GORA: ServiceApi = ServiceApi::new("gora", "20131113", GORA_ENDPOINTS);

// Recipe

static RECIPE_CATEGORY_METHODS: &[ApiMethod] = &[
    ApiMethod::aliased("list", "CategoryList"),
    ApiMethod::aliased("ranking", "CategoryRanking"),
];

static RECIPE_CATEGORY: Endpoint = Endpoint::with_path("category", "Recipe", RECIPE_CATEGORY_METHODS);

static RECIPE_ENDPOINTS: &[&Endpoint] = &[&RECIPE_CATEGORY];

/// Rakuten Recipe categories and rankings.
pub static RECIPE: ServiceApi = ServiceApi::new("recipe", "20121121", RECIPE_ENDPOINTS);

// Other

static OTHER_LIST: &[ApiMethod] = &[ApiMethod::new("list")];

static OTHER_HIGH_COMMISSION_SHOP: Endpoint =
    Endpoint::with_path("high_commission_shop", "HighCommissionShop", OTHER_LIST);

static OTHER_ENDPOINTS: &[&Endpoint] = &[&OTHER_HIGH_COMMISSION_SHOP];

/// Miscellaneous affiliate APIs.
pub static OTHER: ServiceApi = ServiceApi::new("other", "20131205", OTHER_ENDPOINTS);

/// Every built-in service.
pub static SERVICES: &[&ServiceApi] = &[
    &ICHIBA, &BOOKS, &TRAVEL, &AUCTION, &KOBO, &GORA, &RECIPE, &OTHER,
];

/// Finds a built-in service by name.
///
/// ```rust
/// use rakuten_ws::registry::catalog;
///
/// assert_eq!(catalog::find("ichiba").map(|s| s.name), Some("ichiba"));
/// assert!(catalog::find("unknown").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static ServiceApi> {
    let wanted = clean_name(name);
    SERVICES
        .iter()
        .copied()
        .find(|service| clean_name(service.name) == wanted)
}
