//! ISO 3166-1 country table.

use super::Country;

/// Supported countries, sorted by code.
pub static COUNTRIES: &[Country] = &[
    Country { code: "AD", name: "Andorra" },
    Country { code: "AE", name: "United Arab Emirates" },
    Country { code: "AF", name: "Afghanistan" },
    Country { code: "AG", name: "Antigua and Barbuda" },
    Country { code: "AL", name: "Albania" },
    Country { code: "AM", name: "Armenia" },
    Country { code: "AO", name: "Angola" },
    Country { code: "AR", name: "Argentina" },
    Country { code: "AT", name: "Austria" },
    Country { code: "AU", name: "Australia" },
    Country { code: "AZ", name: "Azerbaijan" },
    Country { code: "BA", name: "Bosnia and Herzegovina" },
    Country { code: "BB", name: "Barbados" },
    Country { code: "BD", name: "Bangladesh" },
    Country { code: "BE", name: "Belgium" },
    Country { code: "BF", name: "Burkina Faso" },
    Country { code: "BG", name: "Bulgaria" },
    Country { code: "BH", name: "Bahrain" },
    Country { code: "BJ", name: "Benin" },
    Country { code: "BN", name: "Brunei" },
    Country { code: "BO", name: "Bolivia" },
    Country { code: "BR", name: "Brazil" },
    Country { code: "BS", name: "Bahamas" },
    Country { code: "BT", name: "Bhutan" },
    Country { code: "BW", name: "Botswana" },
    Country { code: "BY", name: "Belarus" },
    Country { code: "BZ", name: "Belize" },
    Country { code: "CA", name: "Canada" },
    Country { code: "CD", name: "Congo (DRC)" },
    Country { code: "CH", name: "Switzerland" },
    Country { code: "CI", name: "Côte d'Ivoire" },
    Country { code: "CL", name: "Chile" },
    Country { code: "CM", name: "Cameroon" },
    Country { code: "CN", name: "China" },
    Country { code: "CO", name: "Colombia" },
    Country { code: "CR", name: "Costa Rica" },
    Country { code: "CU", name: "Cuba" },
    Country { code: "CY", name: "Cyprus" },
    Country { code: "CZ", name: "Czechia" },
    Country { code: "DE", name: "Germany" },
    Country { code: "DK", name: "Denmark" },
    Country { code: "DO", name: "Dominican Republic" },
    Country { code: "DZ", name: "Algeria" },
    Country { code: "EC", name: "Ecuador" },
    Country { code: "EE", name: "Estonia" },
    Country { code: "EG", name: "Egypt" },
    Country { code: "ES", name: "Spain" },
    Country { code: "ET", name: "Ethiopia" },
    Country { code: "FI", name: "Finland" },
    Country { code: "FJ", name: "Fiji" },
    Country { code: "FR", name: "France" },
    Country { code: "GB", name: "United Kingdom" },
    Country { code: "GE", name: "Georgia" },
    Country { code: "GH", name: "Ghana" },
    Country { code: "GR", name: "Greece" },
    Country { code: "GT", name: "Guatemala" },
    Country { code: "HK", name: "Hong Kong SAR" },
    Country { code: "HN", name: "Honduras" },
    Country { code: "HR", name: "Croatia" },
    Country { code: "HU", name: "Hungary" },
    Country { code: "ID", name: "Indonesia" },
    Country { code: "IE", name: "Ireland" },
    Country { code: "IL", name: "Israel" },
    Country { code: "IN", name: "India" },
    Country { code: "IQ", name: "Iraq" },
    Country { code: "IR", name: "Iran" },
    Country { code: "IS", name: "Iceland" },
    Country { code: "IT", name: "Italy" },
    Country { code: "JM", name: "Jamaica" },
    Country { code: "JO", name: "Jordan" },
    Country { code: "JP", name: "Japan" },
    Country { code: "KE", name: "Kenya" },
    Country { code: "KG", name: "Kyrgyzstan" },
    Country { code: "KH", name: "Cambodia" },
    Country { code: "KR", name: "South Korea" },
    Country { code: "KW", name: "Kuwait" },
    Country { code: "KZ", name: "Kazakhstan" },
    Country { code: "LA", name: "Laos" },
    Country { code: "LB", name: "Lebanon" },
    Country { code: "LI", name: "Liechtenstein" },
    Country { code: "LK", name: "Sri Lanka" },
    Country { code: "LT", name: "Lithuania" },
    Country { code: "LU", name: "Luxembourg" },
    Country { code: "LV", name: "Latvia" },
    Country { code: "MA", name: "Morocco" },
    Country { code: "MC", name: "Monaco" },
    Country { code: "MD", name: "Moldova" },
    Country { code: "ME", name: "Montenegro" },
    Country { code: "MG", name: "Madagascar" },
    Country { code: "MK", name: "North Macedonia" },
    Country { code: "MM", name: "Myanmar" },
    Country { code: "MN", name: "Mongolia" },
    Country { code: "MO", name: "Macao SAR" },
    Country { code: "MT", name: "Malta" },
    Country { code: "MU", name: "Mauritius" },
    Country { code: "MV", name: "Maldives" },
    Country { code: "MX", name: "Mexico" },
    Country { code: "MY", name: "Malaysia" },
    Country { code: "MZ", name: "Mozambique" },
    Country { code: "NA", name: "Namibia" },
    Country { code: "NG", name: "Nigeria" },
    Country { code: "NI", name: "Nicaragua" },
    Country { code: "NL", name: "Netherlands" },
    Country { code: "NO", name: "Norway" },
    Country { code: "NP", name: "Nepal" },
    Country { code: "NZ", name: "New Zealand" },
    Country { code: "OM", name: "Oman" },
    Country { code: "PA", name: "Panama" },
    Country { code: "PE", name: "Peru" },
    Country { code: "PH", name: "Philippines" },
    Country { code: "PK", name: "Pakistan" },
    Country { code: "PL", name: "Poland" },
    Country { code: "PR", name: "Puerto Rico" },
    Country { code: "PT", name: "Portugal" },
    Country { code: "PY", name: "Paraguay" },
    Country { code: "QA", name: "Qatar" },
    Country { code: "RO", name: "Romania" },
    Country { code: "RS", name: "Serbia" },
    Country { code: "RU", name: "Russia" },
    Country { code: "RW", name: "Rwanda" },
    Country { code: "SA", name: "Saudi Arabia" },
    Country { code: "SE", name: "Sweden" },
    Country { code: "SG", name: "Singapore" },
    Country { code: "SI", name: "Slovenia" },
    Country { code: "SK", name: "Slovakia" },
    Country { code: "SN", name: "Senegal" },
    Country { code: "SV", name: "El Salvador" },
    Country { code: "TH", name: "Thailand" },
    Country { code: "TN", name: "Tunisia" },
    Country { code: "TR", name: "Türkiye" },
    Country { code: "TT", name: "Trinidad and Tobago" },
    Country { code: "TW", name: "Taiwan" },
    Country { code: "TZ", name: "Tanzania" },
    Country { code: "UA", name: "Ukraine" },
    Country { code: "UG", name: "Uganda" },
    Country { code: "US", name: "United States" },
    Country { code: "UY", name: "Uruguay" },
    Country { code: "UZ", name: "Uzbekistan" },
    Country { code: "VE", name: "Venezuela" },
    Country { code: "VN", name: "Vietnam" },
    Country { code: "ZA", name: "South Africa" },
    Country { code: "ZM", name: "Zambia" },
    Country { code: "ZW", name: "Zimbabwe" },
];
