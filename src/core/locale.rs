//! Locale data for currency rendering.
//!
//! Patterns use `¤` for the currency symbol and `#` for the formatted number.
//! Spaces inside patterns are no-break spaces, matching platform output.

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSettings {
    pub tag: &'static str,
    pub decimal: char,
    pub group: char,
    pub primary_group: usize,
    pub secondary_group: usize,
    /// 整數位數至少要比 primary_group 多出這麼多位才插入分隔符號
    pub min_grouping: usize,
    pub positive_pattern: &'static str,
    pub negative_pattern: &'static str,
    symbols: &'static [(&'static str, &'static str)],
}

impl LocaleSettings {
    /// 該語系對幣別的寫法；沒有專屬寫法時回傳 None
    pub fn symbol_override(&self, code: &str) -> Option<&'static str> {
        self.symbols
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, s)| *s)
    }

    pub fn pattern(&self, negative: bool) -> &'static str {
        if negative {
            self.negative_pattern
        } else {
            self.positive_pattern
        }
    }
}

const fn western(
    tag: &'static str,
    decimal: char,
    group: char,
    positive_pattern: &'static str,
    negative_pattern: &'static str,
    symbols: &'static [(&'static str, &'static str)],
) -> LocaleSettings {
    LocaleSettings {
        tag,
        decimal,
        group,
        primary_group: 3,
        secondary_group: 3,
        min_grouping: 1,
        positive_pattern,
        negative_pattern,
        symbols,
    }
}

static LOCALES: &[LocaleSettings] = &[
    western("en-US", '.', ',', "¤#", "-¤#", &[("USD", "$"), ("JPY", "¥")]),
    western(
        "en-GB",
        '.',
        ',',
        "¤#",
        "-¤#",
        &[("USD", "US$"), ("JPY", "¥")],
    ),
    western(
        "en-CA",
        '.',
        ',',
        "¤#",
        "-¤#",
        &[("CAD", "$"), ("USD", "US$"), ("JPY", "¥")],
    ),
    western(
        "en-AU",
        '.',
        ',',
        "¤#",
        "-¤#",
        &[("AUD", "$"), ("USD", "USD"), ("JPY", "JPY")],
    ),
    LocaleSettings {
        tag: "en-IN",
        decimal: '.',
        group: ',',
        primary_group: 3,
        secondary_group: 2,
        min_grouping: 1,
        positive_pattern: "¤#",
        negative_pattern: "-¤#",
        symbols: &[("INR", "₹"), ("USD", "$"), ("JPY", "¥")],
    },
    western(
        "de-DE",
        ',',
        '.',
        "#\u{a0}¤",
        "-#\u{a0}¤",
        &[("EUR", "€"), ("USD", "$"), ("JPY", "¥")],
    ),
    western(
        "de-CH",
        '.',
        '’',
        "¤\u{a0}#",
        "¤-#",
        &[("CHF", "CHF"), ("EUR", "€"), ("USD", "$"), ("JPY", "¥")],
    ),
    western(
        "fr-FR",
        ',',
        NARROW_NBSP,
        "#\u{a0}¤",
        "-#\u{a0}¤",
        &[
            ("EUR", "€"),
            ("USD", "$US"),
            ("GBP", "£GB"),
            ("CAD", "$CA"),
            ("JPY", "JPY"),
        ],
    ),
    western(
        "fr-CA",
        ',',
        NBSP,
        "#\u{a0}¤",
        "-#\u{a0}¤",
        &[("CAD", "$"), ("USD", "$\u{a0}US"), ("JPY", "¥")],
    ),
    LocaleSettings {
        tag: "es-ES",
        decimal: ',',
        group: '.',
        primary_group: 3,
        secondary_group: 3,
        min_grouping: 2,
        positive_pattern: "#\u{a0}¤",
        negative_pattern: "-#\u{a0}¤",
        symbols: &[("EUR", "€"), ("USD", "US$"), ("JPY", "JPY")],
    },
    western(
        "it-IT",
        ',',
        '.',
        "#\u{a0}¤",
        "-#\u{a0}¤",
        &[("EUR", "€"), ("USD", "USD"), ("JPY", "JPY")],
    ),
    western(
        "nl-NL",
        ',',
        '.',
        "¤\u{a0}#",
        "¤\u{a0}-#",
        &[("EUR", "€"), ("USD", "US$"), ("JPY", "JP¥")],
    ),
    western(
        "pt-BR",
        ',',
        '.',
        "¤\u{a0}#",
        "-¤\u{a0}#",
        &[("BRL", "R$"), ("USD", "US$"), ("EUR", "€"), ("JPY", "JP¥")],
    ),
    western(
        "ja-JP",
        '.',
        ',',
        "¤#",
        "-¤#",
        &[("JPY", "￥"), ("USD", "$"), ("CNY", "元")],
    ),
    western(
        "zh-CN",
        '.',
        ',',
        "¤#",
        "-¤#",
        &[("CNY", "¥"), ("USD", "US$"), ("JPY", "JP¥")],
    ),
    western(
        "sv-SE",
        ',',
        NBSP,
        "#\u{a0}¤",
        "\u{2212}#\u{a0}¤",
        &[("SEK", "kr"), ("USD", "US$"), ("EUR", "€"), ("NOK", "Nkr"), ("DKK", "Dkr")],
    ),
];

static LANGUAGE_DEFAULTS: &[(&str, &str)] = &[
    ("en", "en-US"),
    ("de", "de-DE"),
    ("fr", "fr-FR"),
    ("es", "es-ES"),
    ("it", "it-IT"),
    ("nl", "nl-NL"),
    ("pt", "pt-BR"),
    ("ja", "ja-JP"),
    ("zh", "zh-CN"),
    ("sv", "sv-SE"),
];

fn by_tag(tag: &str) -> Option<&'static LocaleSettings> {
    LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(tag))
}

pub fn default_locale() -> &'static LocaleSettings {
    &LOCALES[0]
}

/// 依序嘗試完整標籤、逐步去掉尾端子標籤、語言預設，最後退回 en-US
pub fn resolve(tag: &str) -> &'static LocaleSettings {
    let normalized = tag.trim().replace('_', "-");
    let parts: Vec<&str> = normalized.split('-').filter(|p| !p.is_empty()).collect();

    for len in (1..=parts.len()).rev() {
        if let Some(found) = by_tag(&parts[..len].join("-")) {
            return found;
        }
    }

    if let Some(language) = parts.first() {
        if let Some((_, tag)) = LANGUAGE_DEFAULTS
            .iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
        {
            if let Some(found) = by_tag(tag) {
                return found;
            }
        }
    }

    tracing::debug!("Locale '{}' not supported, falling back to en-US", tag);
    default_locale()
}

pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|l| l.tag)
}
