use serde::{Deserialize, Serialize};

/// Kind of catalog offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OfferKind {
    #[serde(rename = "BASE_GAME")]
    BaseGame,
    #[serde(rename = "ADD_ON")]
    AddOn,
    #[default]
    #[serde(other)]
    Other,
}

impl OfferKind {
    pub fn label(&self) -> Option<&str> {
        match self {
            OfferKind::BaseGame => Some("Base Game"),
            OfferKind::AddOn => Some("Add-On"),
            OfferKind::Other => None,
        }
    }
}

/// Well-known key image types used by the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Wide,
    Tall,
    Thumbnail,
    HeroVideo,
    Other,
}

impl ImageKind {
    pub fn from_type(image_type: &str) -> Self {
        match image_type {
            "OfferImageWide" => ImageKind::Wide,
            "OfferImageTall" => ImageKind::Tall,
            "Thumbnail" => ImageKind::Thumbnail,
            "heroCarouselVideo" => ImageKind::HeroVideo,
            _ => ImageKind::Other,
        }
    }
}

/// Represents a game or add-on offer from the Epic Games Store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    pub title: String,
    pub id: String,
    pub namespace: String,
    pub description: String,
    pub effective_date: Option<String>,
    pub offer_type: OfferKind,
    pub expiry_date: Option<String>,
    pub viewable_date: Option<String>,
    pub status: String,
    pub is_code_redemption_only: bool,
    pub key_images: Vec<KeyImage>,
    pub seller: Seller,
    pub product_slug: Option<String>,
    pub url_slug: Option<String>,
    pub url: Option<String>,
    pub items: Vec<Item>,
    pub custom_attributes: Vec<CustomAttribute>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub catalog_ns: CatalogNs,
    pub offer_mappings: Vec<PageMapping>,
    pub price: Price,
    pub promotions: Option<Promotions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyImage {
    #[serde(rename = "type")]
    pub image_type: String,
    pub url: String,
}

impl KeyImage {
    pub fn kind(&self) -> ImageKind {
        ImageKind::from_type(&self.image_type)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seller {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub namespace: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub path: String,
}

impl Category {
    /// Last segment of the category path, used as a badge
    pub fn leaf(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogNs {
    pub mappings: Vec<PageMapping>,
}

/// Page mapping shared by `catalogNs.mappings` and `offerMappings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMapping {
    pub page_slug: Option<String>,
    pub page_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub total_price: TotalPrice,
    pub line_offers: Vec<LineOffer>,
}

/// Amounts are in minor currency units (cents for USD)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TotalPrice {
    pub discount_price: i64,
    pub original_price: i64,
    pub voucher_discount: i64,
    pub discount: i64,
    pub currency_code: String,
    pub currency_info: CurrencyInfo,
    pub fmt_price: FormattedPrice,
}

impl Default for TotalPrice {
    fn default() -> Self {
        Self {
            discount_price: 0,
            original_price: 0,
            voucher_discount: 0,
            discount: 0,
            currency_code: "USD".to_string(),
            currency_info: CurrencyInfo::default(),
            fmt_price: FormattedPrice::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub decimals: u32,
}

impl Default for CurrencyInfo {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormattedPrice {
    pub original_price: String,
    pub discount_price: String,
    pub intermediate_price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineOffer {
    pub applied_rules: Vec<AppliedRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppliedRule {
    pub id: String,
    pub end_date: Option<String>,
    pub discount_setting: DiscountSetting,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountSetting {
    pub discount_type: String,
    pub discount_percentage: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Promotions {
    pub promotional_offers: Vec<PromotionGroup>,
    pub upcoming_promotional_offers: Vec<PromotionGroup>,
}

/// Container the storefront wraps promotional intervals in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromotionGroup {
    pub promotional_offers: Vec<PromotionalInterval>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromotionalInterval {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub discount_setting: DiscountSetting,
}

impl Offer {
    pub fn is_add_on(&self) -> bool {
        self.offer_type == OfferKind::AddOn
    }

    pub fn offer_mapping_slug(&self) -> Option<&str> {
        self.offer_mappings.first()?.page_slug.as_deref()
    }

    pub fn catalog_slug(&self) -> Option<&str> {
        self.catalog_ns.mappings.first()?.page_slug.as_deref()
    }

    /// First interval of the first current promotion group
    pub fn current_interval(&self) -> Option<&PromotionalInterval> {
        self.promotions
            .as_ref()?
            .promotional_offers
            .first()?
            .promotional_offers
            .first()
    }

    /// First interval of the first upcoming promotion group
    pub fn upcoming_interval(&self) -> Option<&PromotionalInterval> {
        self.promotions
            .as_ref()?
            .upcoming_promotional_offers
            .first()?
            .promotional_offers
            .first()
    }

    pub fn has_upcoming_promotions(&self) -> bool {
        self.promotions
            .as_ref()
            .map(|p| !p.upcoming_promotional_offers.is_empty())
            .unwrap_or(false)
    }
}
