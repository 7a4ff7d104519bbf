//! ISO 4217 currency codes and the static reference table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

/// ISO 4217 numeric currency code, e.g. 840 = USD, 980 = UAH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(pub u16);

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match CurrencyTable::get(*self) {
            Some(info) => write!(f, "{}", info.alpha),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    /// Accepts either a numeric code ("840") or an alpha code ("USD", case
    /// insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(numeric) = s.parse::<u16>() {
            return Ok(CurrencyCode(numeric));
        }
        CurrencyTable::by_alpha(s)
            .map(|info| info.numeric)
            .ok_or_else(|| anyhow::anyhow!("Unknown currency: {}", s))
    }
}

/// Reference data for one currency. Never mutated at runtime.
#[derive(Debug, Clone)]
pub struct CurrencyInfo {
    pub numeric: CurrencyCode,
    pub alpha: &'static str,
    pub name: &'static str,
    /// Two-letter country code, used for flag display.
    pub country: &'static str,
}

impl CurrencyInfo {
    pub fn flag_url(&self) -> String {
        format!("https://flagcdn.com/24x18/{}.png", self.country)
    }
}

/// Static lookup table over the common ISO 4217 numeric codes.
pub struct CurrencyTable;

impl CurrencyTable {
    pub fn get(code: CurrencyCode) -> Option<&'static CurrencyInfo> {
        BY_NUMERIC.get(&code.0).copied()
    }

    pub fn by_alpha(alpha: &str) -> Option<&'static CurrencyInfo> {
        BY_ALPHA.get(alpha.to_uppercase().as_str()).copied()
    }

    pub fn all() -> impl Iterator<Item = &'static CurrencyInfo> {
        CURRENCIES.iter()
    }

    pub fn alpha(code: CurrencyCode) -> Option<&'static str> {
        Self::get(code).map(|info| info.alpha)
    }

    pub fn name(code: CurrencyCode) -> Option<&'static str> {
        Self::get(code).map(|info| info.name)
    }
}

static BY_NUMERIC: LazyLock<HashMap<u16, &'static CurrencyInfo>> =
    LazyLock::new(|| CURRENCIES.iter().map(|info| (info.numeric.0, info)).collect());

static BY_ALPHA: LazyLock<HashMap<&'static str, &'static CurrencyInfo>> =
    LazyLock::new(|| CURRENCIES.iter().map(|info| (info.alpha, info)).collect());

macro_rules! currency {
    ($numeric:literal, $alpha:literal, $name:literal, $country:literal) => {
        CurrencyInfo {
            numeric: CurrencyCode($numeric),
            alpha: $alpha,
            name: $name,
            country: $country,
        }
    };
}

static CURRENCIES: &[CurrencyInfo] = &[
    currency!(840, "USD", "US Dollar", "us"),
    currency!(978, "EUR", "Euro", "eu"),
    currency!(980, "UAH", "Ukrainian Hryvnia", "ua"),
    currency!(826, "GBP", "British Pound", "gb"),
    currency!(392, "JPY", "Japanese Yen", "jp"),
    currency!(756, "CHF", "Swiss Franc", "ch"),
    currency!(156, "CNY", "Chinese Yuan", "cn"),
    currency!(784, "AED", "UAE Dirham", "ae"),
    currency!(971, "AFN", "Afghan Afghani", "af"),
    currency!(8, "ALL", "Albanian Lek", "al"),
    currency!(51, "AMD", "Armenian Dram", "am"),
    currency!(973, "AOA", "Angolan Kwanza", "ao"),
    currency!(32, "ARS", "Argentine Peso", "ar"),
    currency!(36, "AUD", "Australian Dollar", "au"),
    currency!(944, "AZN", "Azerbaijani Manat", "az"),
    currency!(50, "BDT", "Bangladeshi Taka", "bd"),
    currency!(975, "BGN", "Bulgarian Lev", "bg"),
    currency!(48, "BHD", "Bahraini Dinar", "bh"),
    currency!(108, "BIF", "Burundian Franc", "bi"),
    currency!(96, "BND", "Brunei Dollar", "bn"),
    currency!(68, "BOB", "Bolivian Boliviano", "bo"),
    currency!(986, "BRL", "Brazilian Real", "br"),
    currency!(72, "BWP", "Botswana Pula", "bw"),
    currency!(933, "BYN", "Belarusian Ruble", "by"),
    currency!(124, "CAD", "Canadian Dollar", "ca"),
    currency!(976, "CDF", "Congolese Franc", "cd"),
    currency!(152, "CLP", "Chilean Peso", "cl"),
    currency!(170, "COP", "Colombian Peso", "co"),
    currency!(188, "CRC", "Costa Rican Colón", "cr"),
    currency!(192, "CUP", "Cuban Peso", "cu"),
    currency!(203, "CZK", "Czech Koruna", "cz"),
    currency!(262, "DJF", "Djiboutian Franc", "dj"),
    currency!(208, "DKK", "Danish Krone", "dk"),
    currency!(12, "DZD", "Algerian Dinar", "dz"),
    currency!(818, "EGP", "Egyptian Pound", "eg"),
    currency!(230, "ETB", "Ethiopian Birr", "et"),
    currency!(981, "GEL", "Georgian Lari", "ge"),
    currency!(936, "GHS", "Ghanaian Cedi", "gh"),
    currency!(270, "GMD", "Gambian Dalasi", "gm"),
    currency!(324, "GNF", "Guinean Franc", "gn"),
    currency!(344, "HKD", "Hong Kong Dollar", "hk"),
    currency!(191, "HRK", "Croatian Kuna", "hr"),
    currency!(348, "HUF", "Hungarian Forint", "hu"),
    currency!(360, "IDR", "Indonesian Rupiah", "id"),
    currency!(376, "ILS", "Israeli Shekel", "il"),
    currency!(356, "INR", "Indian Rupee", "in"),
    currency!(368, "IQD", "Iraqi Dinar", "iq"),
    currency!(352, "ISK", "Icelandic Króna", "is"),
    currency!(400, "JOD", "Jordanian Dinar", "jo"),
    currency!(404, "KES", "Kenyan Shilling", "ke"),
    currency!(417, "KGS", "Kyrgyzstani Som", "kg"),
    currency!(116, "KHR", "Cambodian Riel", "kh"),
    currency!(410, "KRW", "South Korean Won", "kr"),
    currency!(414, "KWD", "Kuwaiti Dinar", "kw"),
    currency!(398, "KZT", "Kazakhstani Tenge", "kz"),
    currency!(418, "LAK", "Lao Kip", "la"),
    currency!(422, "LBP", "Lebanese Pound", "lb"),
    currency!(144, "LKR", "Sri Lankan Rupee", "lk"),
    currency!(434, "LYD", "Libyan Dinar", "ly"),
    currency!(504, "MAD", "Moroccan Dirham", "ma"),
    currency!(498, "MDL", "Moldovan Leu", "md"),
    currency!(969, "MGA", "Malagasy Ariary", "mg"),
    currency!(807, "MKD", "Macedonian Denar", "mk"),
    currency!(496, "MNT", "Mongolian Tögrög", "mn"),
    currency!(480, "MUR", "Mauritian Rupee", "mu"),
    currency!(454, "MWK", "Malawian Kwacha", "mw"),
    currency!(484, "MXN", "Mexican Peso", "mx"),
    currency!(458, "MYR", "Malaysian Ringgit", "my"),
    currency!(943, "MZN", "Mozambican Metical", "mz"),
    currency!(516, "NAD", "Namibian Dollar", "na"),
    currency!(566, "NGN", "Nigerian Naira", "ng"),
    currency!(558, "NIO", "Nicaraguan Córdoba", "ni"),
    currency!(578, "NOK", "Norwegian Krone", "no"),
    currency!(524, "NPR", "Nepalese Rupee", "np"),
    currency!(554, "NZD", "New Zealand Dollar", "nz"),
    currency!(512, "OMR", "Omani Rial", "om"),
    currency!(604, "PEN", "Peruvian Sol", "pe"),
    currency!(608, "PHP", "Philippine Peso", "ph"),
    currency!(586, "PKR", "Pakistani Rupee", "pk"),
    currency!(985, "PLN", "Polish Złoty", "pl"),
    currency!(600, "PYG", "Paraguayan Guaraní", "py"),
    currency!(634, "QAR", "Qatari Riyal", "qa"),
    currency!(946, "RON", "Romanian Leu", "ro"),
    currency!(941, "RSD", "Serbian Dinar", "rs"),
    currency!(643, "RUB", "Russian Ruble", "ru"),
    currency!(682, "SAR", "Saudi Riyal", "sa"),
    currency!(690, "SCR", "Seychellois Rupee", "sc"),
    currency!(938, "SDG", "Sudanese Pound", "sd"),
    currency!(752, "SEK", "Swedish Krona", "se"),
    currency!(702, "SGD", "Singapore Dollar", "sg"),
    currency!(694, "SLL", "Sierra Leonean Leone", "sl"),
    currency!(706, "SOS", "Somali Shilling", "so"),
    currency!(968, "SRD", "Surinamese Dollar", "sr"),
    currency!(748, "SZL", "Swazi Lilangeni", "sz"),
    currency!(764, "THB", "Thai Baht", "th"),
    currency!(972, "TJS", "Tajikistani Somoni", "tj"),
    currency!(788, "TND", "Tunisian Dinar", "tn"),
    currency!(949, "TRY", "Turkish Lira", "tr"),
    currency!(901, "TWD", "New Taiwan Dollar", "tw"),
    currency!(834, "TZS", "Tanzanian Shilling", "tz"),
    currency!(800, "UGX", "Ugandan Shilling", "ug"),
    currency!(858, "UYU", "Uruguayan Peso", "uy"),
    currency!(860, "UZS", "Uzbekistani Som", "uz"),
    currency!(704, "VND", "Vietnamese Dong", "vn"),
    currency!(950, "XAF", "Central African CFA Franc", "cf"),
    currency!(952, "XOF", "West African CFA Franc", "sn"),
    currency!(886, "YER", "Yemeni Rial", "ye"),
    currency!(710, "ZAR", "South African Rand", "za"),
];
