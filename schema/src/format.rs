/// Values of the `format` keyword that map onto a dedicated zod check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    DateTime,
    Email,
    Ip,
    Ipv4,
    Ipv6,
    Uri,
    Uuid,
    Time,
    Date,
    Duration,
    Binary,
}

impl StringFormat {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let format = match keyword {
            "date-time" => StringFormat::DateTime,
            "email"     => StringFormat::Email,
            "ip"        => StringFormat::Ip,
            "ipv4"      => StringFormat::Ipv4,
            "ipv6"      => StringFormat::Ipv6,
            "uri"       => StringFormat::Uri,
            "uuid"      => StringFormat::Uuid,
            "time"      => StringFormat::Time,
            "date"      => StringFormat::Date,
            "duration"  => StringFormat::Duration,
            "binary"    => StringFormat::Binary,
            _ => return None,
        };
        Some(format)
    }

    pub fn as_keyword(self) -> &'static str {
        match self {
            StringFormat::DateTime => "date-time",
            StringFormat::Email    => "email",
            StringFormat::Ip       => "ip",
            StringFormat::Ipv4     => "ipv4",
            StringFormat::Ipv6     => "ipv6",
            StringFormat::Uri      => "uri",
            StringFormat::Uuid     => "uuid",
            StringFormat::Time     => "time",
            StringFormat::Date     => "date",
            StringFormat::Duration => "duration",
            StringFormat::Binary   => "binary",
        }
    }
}

/// Values of the `contentEncoding` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Base64,
}

impl ContentEncoding {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "base64" => Some(ContentEncoding::Base64),
            _ => None,
        }
    }
}

/// Returns true for `application/json` and structured-syntax `+json` types.
/// Media type parameters (`; charset=utf-8`) and case are ignored.
pub fn is_json_media_type(media_type: &str) -> bool {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some((_, subtype)) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}
