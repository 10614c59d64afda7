//! Government scheme content.
//!
//! A fixed table of flagship schemes ships with the app; a live dataset
//! fetch can refresh it but any failure or empty answer falls back to the
//! embedded rows, so scheme content is always present.

use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use krishi_core::Locale;

use crate::error::MarketError;

const DEFAULT_BASE_URL: &str = "https://api.data.gov.in";
/// Schemes resource (Dept. of Agriculture, Cooperation & Farmers Welfare).
const SCHEMES_RESOURCE: &str = "b4e6b503-05e5-4e4e-8e53-4b4a7f6e3e3e";
const PAGE_SIZE: usize = 20;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// One scheme descriptor. Hindi/Telugu variants are optional; accessors
/// fall back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecord {
    #[serde(alias = "scheme_name")]
    pub name: String,
    #[serde(default)]
    pub name_hi: Option<String>,
    #[serde(default)]
    pub name_te: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default)]
    pub description_hi: Option<String>,
    #[serde(default)]
    pub description_te: Option<String>,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub link: String,
}

impl SchemeRecord {
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.name,
            Locale::Hi => self.name_hi.as_deref().unwrap_or(&self.name),
            Locale::Te => self.name_te.as_deref().unwrap_or(&self.name),
        }
    }

    pub fn description(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.description,
            Locale::Hi => self.description_hi.as_deref().unwrap_or(&self.description),
            Locale::Te => self.description_te.as_deref().unwrap_or(&self.description),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SchemesResponse {
    #[serde(default)]
    records: Vec<SchemeRecord>,
}

struct SchemeSeed {
    name: &'static str,
    name_hi: &'static str,
    name_te: &'static str,
    category: &'static str,
    amount: &'static str,
    description: &'static str,
    description_hi: &'static str,
    description_te: &'static str,
    eligibility: &'static str,
    link: &'static str,
}

const SEEDS: [SchemeSeed; 8] = [
    SchemeSeed {
        name: "PM-KISAN",
        name_hi: "पीएम-किसान",
        name_te: "పీఎం-కిసాన్",
        category: "Income Support",
        amount: "₹6,000/year",
        description: "Direct income support of ₹6,000 per year to all farmer families in 3 installments of ₹2,000.",
        description_hi: "सभी किसान परिवारों को ₹6,000 प्रति वर्ष की प्रत्यक्ष आय सहायता, ₹2,000 की 3 किस्तों में।",
        description_te: "అన్ని రైతు కుటుంబాలకు సంవత్సరానికి ₹6,000 నేరుగా ₹2,000 చొప్పున 3 వాయిదాలలో.",
        eligibility: "All small and marginal farmers with cultivable land",
        link: "https://pmkisan.gov.in",
    },
    SchemeSeed {
        name: "PM Fasal Bima Yojana",
        name_hi: "पीएम फसल बीमा योजना",
        name_te: "పీఎం పంట బీమా యోజన",
        category: "Crop Insurance",
        amount: "1.5-5% Premium",
        description: "Comprehensive crop insurance covering natural calamities, pests, and diseases.",
        description_hi: "प्राकृतिक आपदाओं, कीटों और बीमारियों को कवर करने वाला व्यापक फसल बीमा।",
        description_te: "సహజ విపత్తులు, తెగుళ్ళు మరియు వ్యాధులను కవర్ చేసే సమగ్ర పంట బీమా.",
        eligibility: "All farmers growing notified crops",
        link: "https://pmfby.gov.in",
    },
    SchemeSeed {
        name: "Kisan Credit Card",
        name_hi: "किसान क्रेडिट कार्ड",
        name_te: "కిసాన్ క్రెడిట్ కార్డ్",
        category: "Credit",
        amount: "Up to ₹3 Lakh",
        description: "Flexible credit for crop cultivation and allied activities at subsidized interest rates.",
        description_hi: "फसल खेती और संबद्ध गतिविधियों के लिए रियायती ब्याज दरों पर लचीला ऋण।",
        description_te: "పంట సాగు మరియు అనుబంధ కార్యకలాపాలకు రాయితీ వడ్డీ రేట్లలో సౌకర్యవంతమైన రుణం.",
        eligibility: "All farmers, sharecroppers, tenant farmers",
        link: "https://www.nabard.org",
    },
    SchemeSeed {
        name: "Soil Health Card Scheme",
        name_hi: "मृदा स्वास्थ्य कार्ड योजना",
        name_te: "నేల ఆరోగ్య కార్డ్ పథకం",
        category: "Soil Health",
        amount: "Free Testing",
        description: "Free soil testing and health card with fertilizer recommendations to improve productivity.",
        description_hi: "उत्पादकता बढ़ाने के लिए उर्वरक सिफारिशों के साथ मुफ्त मिट्टी परीक्षण।",
        description_te: "ఉత్పాదకత మెరుగుపరచడానికి ఎరువుల సిఫార్సులతో ఉచిత నేల పరీక్ష.",
        eligibility: "All farmers across India",
        link: "https://soilhealth.dac.gov.in",
    },
    SchemeSeed {
        name: "PM Krishi Sinchai Yojana",
        name_hi: "पीएम कृषि सिंचाई योजना",
        name_te: "పీఎం వ్యవసాయ నీటిపారుదల యోజన",
        category: "Irrigation",
        amount: "55-90% Subsidy",
        description: "Subsidies for drip and sprinkler irrigation. Har Khet Ko Pani - water to every field.",
        description_hi: "ड्रिप और स्प्रिंकलर सिंचाई पर सब्सिडी। हर खेत को पानी।",
        description_te: "డ్రిప్ మరియు స్ప్రింక్లర్ నీటిపారుదలకు సబ్సిడీ. ప్రతి పొలానికి నీరు.",
        eligibility: "All farmers with agricultural land",
        link: "https://pmksy.gov.in",
    },
    SchemeSeed {
        name: "eNAM - National Agriculture Market",
        name_hi: "eNAM - राष्ट्रीय कृषि बाजार",
        name_te: "eNAM - జాతీయ వ్యవసాయ మార్కెట్",
        category: "Market Access",
        amount: "Better Prices",
        description: "Online trading platform connecting farmers to buyers across India for better price discovery.",
        description_hi: "बेहतर मूल्य खोज के लिए किसानों को भारत भर के खरीदारों से जोड़ने वाला ऑनलाइन प्लेटफॉर्म।",
        description_te: "మెరుగైన ధర కనుగొనడానికి రైతులను భారతదేశం అంతటా కొనుగోలుదారులతో అనుసంధానించే ఆన్‌లైన్ వేదిక.",
        eligibility: "Farmers registered with local APMC",
        link: "https://enam.gov.in",
    },
    SchemeSeed {
        name: "Paramparagat Krishi Vikas Yojana",
        name_hi: "परंपरागत कृषि विकास योजना",
        name_te: "సంప్రదాయ వ్యవసాయ అభివృద్ధి యోజన",
        category: "Organic Farming",
        amount: "₹50,000/ha",
        description: "Financial support for organic farming. Promotes chemical-free sustainable agriculture.",
        description_hi: "जैविक खेती के लिए वित्तीय सहायता। रासायनिक मुक्त टिकाऊ कृषि को बढ़ावा।",
        description_te: "సేంద్రీయ వ్యవసాయానికి ఆర్థిక సహాయం. రసాయన రహిత స్థిరమైన వ్యవసాయాన్ని ప్రోత్సహిస్తుంది.",
        eligibility: "Farmer groups of 50+ farmers",
        link: "https://pgsindia-ncof.gov.in",
    },
    SchemeSeed {
        name: "Rashtriya Krishi Vikas Yojana",
        name_hi: "राष्ट्रीय कृषि विकास योजना",
        name_te: "జాతీయ వ్యవసాయ అభివృద్ధి యోజన",
        category: "Development",
        amount: "State-specific",
        description: "Holistic development of agriculture. Funding for infrastructure, technology, and capacity building.",
        description_hi: "कृषि का समग्र विकास। बुनियादी ढांचे, प्रौद्योगिकी के लिए फंडिंग।",
        description_te: "వ్యవసాయం యొక్క సమగ్ర అభివృద్ధి. మౌలిక సదుపాయాలు, సాంకేతికతకు నిధులు.",
        eligibility: "State governments and farmer groups",
        link: "https://rkvy.nic.in",
    },
];

/// The embedded scheme table, built once for the process lifetime.
pub fn schemes() -> &'static [SchemeRecord] {
    static TABLE: OnceLock<Vec<SchemeRecord>> = OnceLock::new();
    TABLE.get_or_init(|| {
        SEEDS
            .iter()
            .map(|seed| SchemeRecord {
                name: seed.name.to_string(),
                name_hi: Some(seed.name_hi.to_string()),
                name_te: Some(seed.name_te.to_string()),
                category: seed.category.to_string(),
                amount: seed.amount.to_string(),
                description: seed.description.to_string(),
                description_hi: Some(seed.description_hi.to_string()),
                description_te: Some(seed.description_te.to_string()),
                eligibility: seed.eligibility.to_string(),
                link: seed.link.to_string(),
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
pub struct SchemeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SchemeClient {
    pub fn new(api_key: &str) -> Result<Self, MarketError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another endpoint (config override, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch scheme rows from the dataset; any failure or empty result
    /// degrades to the embedded table.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self) -> Vec<SchemeRecord> {
        match self.fetch_live().await {
            Ok(records) if !records.is_empty() => records,
            Ok(_) => {
                tracing::debug!("Schemes dataset empty, using embedded table");
                schemes().to_vec()
            }
            Err(e) => {
                tracing::warn!("Schemes fetch failed ({e}), using embedded table");
                schemes().to_vec()
            }
        }
    }

    async fn fetch_live(&self) -> Result<Vec<SchemeRecord>, MarketError> {
        let url = format!("{}/resource/{}", self.base_url, SCHEMES_RESOURCE);
        let limit = PAGE_SIZE.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(MarketError::from_send)?;

        if !response.status().is_success() {
            return Err(MarketError::Unavailable {
                status: response.status().as_u16(),
            });
        }

        let data: SchemesResponse = response
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        Ok(data.records)
    }
}
