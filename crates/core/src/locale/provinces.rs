//! ISO 3166-2 first-level subdivisions for countries that require a
//! province at checkout.

use super::Province;

/// Supported provinces, grouped by country.
pub static PROVINCES: &[Province] = &[
    // United States
    Province { country_code: "US", code: "US-AL", name: "Alabama" },
    Province { country_code: "US", code: "US-AK", name: "Alaska" },
    Province { country_code: "US", code: "US-AZ", name: "Arizona" },
    Province { country_code: "US", code: "US-AR", name: "Arkansas" },
    Province { country_code: "US", code: "US-CA", name: "California" },
    Province { country_code: "US", code: "US-CO", name: "Colorado" },
    Province { country_code: "US", code: "US-CT", name: "Connecticut" },
    Province { country_code: "US", code: "US-DE", name: "Delaware" },
    Province { country_code: "US", code: "US-DC", name: "District of Columbia" },
    Province { country_code: "US", code: "US-FL", name: "Florida" },
    Province { country_code: "US", code: "US-GA", name: "Georgia" },
    Province { country_code: "US", code: "US-HI", name: "Hawaii" },
    Province { country_code: "US", code: "US-ID", name: "Idaho" },
    Province { country_code: "US", code: "US-IL", name: "Illinois" },
    Province { country_code: "US", code: "US-IN", name: "Indiana" },
    Province { country_code: "US", code: "US-IA", name: "Iowa" },
    Province { country_code: "US", code: "US-KS", name: "Kansas" },
    Province { country_code: "US", code: "US-KY", name: "Kentucky" },
    Province { country_code: "US", code: "US-LA", name: "Louisiana" },
    Province { country_code: "US", code: "US-ME", name: "Maine" },
    Province { country_code: "US", code: "US-MD", name: "Maryland" },
    Province { country_code: "US", code: "US-MA", name: "Massachusetts" },
    Province { country_code: "US", code: "US-MI", name: "Michigan" },
    Province { country_code: "US", code: "US-MN", name: "Minnesota" },
    Province { country_code: "US", code: "US-MS", name: "Mississippi" },
    Province { country_code: "US", code: "US-MO", name: "Missouri" },
    Province { country_code: "US", code: "US-MT", name: "Montana" },
    Province { country_code: "US", code: "US-NE", name: "Nebraska" },
    Province { country_code: "US", code: "US-NV", name: "Nevada" },
    Province { country_code: "US", code: "US-NH", name: "New Hampshire" },
    Province { country_code: "US", code: "US-NJ", name: "New Jersey" },
    Province { country_code: "US", code: "US-NM", name: "New Mexico" },
    Province { country_code: "US", code: "US-NY", name: "New York" },
    Province { country_code: "US", code: "US-NC", name: "North Carolina" },
    Province { country_code: "US", code: "US-ND", name: "North Dakota" },
    Province { country_code: "US", code: "US-OH", name: "Ohio" },
    Province { country_code: "US", code: "US-OK", name: "Oklahoma" },
    Province { country_code: "US", code: "US-OR", name: "Oregon" },
    Province { country_code: "US", code: "US-PA", name: "Pennsylvania" },
    Province { country_code: "US", code: "US-RI", name: "Rhode Island" },
    Province { country_code: "US", code: "US-SC", name: "South Carolina" },
    Province { country_code: "US", code: "US-SD", name: "South Dakota" },
    Province { country_code: "US", code: "US-TN", name: "Tennessee" },
    Province { country_code: "US", code: "US-TX", name: "Texas" },
    Province { country_code: "US", code: "US-UT", name: "Utah" },
    Province { country_code: "US", code: "US-VT", name: "Vermont" },
    Province { country_code: "US", code: "US-VA", name: "Virginia" },
    Province { country_code: "US", code: "US-WA", name: "Washington" },
    Province { country_code: "US", code: "US-WV", name: "West Virginia" },
    Province { country_code: "US", code: "US-WI", name: "Wisconsin" },
    Province { country_code: "US", code: "US-WY", name: "Wyoming" },
    // Canada
    Province { country_code: "CA", code: "CA-AB", name: "Alberta" },
    Province { country_code: "CA", code: "CA-BC", name: "British Columbia" },
    Province { country_code: "CA", code: "CA-MB", name: "Manitoba" },
    Province { country_code: "CA", code: "CA-NB", name: "New Brunswick" },
    Province { country_code: "CA", code: "CA-NL", name: "Newfoundland and Labrador" },
    Province { country_code: "CA", code: "CA-NS", name: "Nova Scotia" },
    Province { country_code: "CA", code: "CA-NT", name: "Northwest Territories" },
    Province { country_code: "CA", code: "CA-NU", name: "Nunavut" },
    Province { country_code: "CA", code: "CA-ON", name: "Ontario" },
    Province { country_code: "CA", code: "CA-PE", name: "Prince Edward Island" },
    Province { country_code: "CA", code: "CA-QC", name: "Quebec" },
    Province { country_code: "CA", code: "CA-SK", name: "Saskatchewan" },
    Province { country_code: "CA", code: "CA-YT", name: "Yukon" },
    // Australia
    Province { country_code: "AU", code: "AU-ACT", name: "Australian Capital Territory" },
    Province { country_code: "AU", code: "AU-NSW", name: "New South Wales" },
    Province { country_code: "AU", code: "AU-NT", name: "Northern Territory" },
    Province { country_code: "AU", code: "AU-QLD", name: "Queensland" },
    Province { country_code: "AU", code: "AU-SA", name: "South Australia" },
    Province { country_code: "AU", code: "AU-TAS", name: "Tasmania" },
    Province { country_code: "AU", code: "AU-VIC", name: "Victoria" },
    Province { country_code: "AU", code: "AU-WA", name: "Western Australia" },
    // India
    Province { country_code: "IN", code: "IN-AP", name: "Andhra Pradesh" },
    Province { country_code: "IN", code: "IN-DL", name: "Delhi" },
    Province { country_code: "IN", code: "IN-GJ", name: "Gujarat" },
    Province { country_code: "IN", code: "IN-KA", name: "Karnataka" },
    Province { country_code: "IN", code: "IN-KL", name: "Kerala" },
    Province { country_code: "IN", code: "IN-MH", name: "Maharashtra" },
    Province { country_code: "IN", code: "IN-RJ", name: "Rajasthan" },
    Province { country_code: "IN", code: "IN-TN", name: "Tamil Nadu" },
    Province { country_code: "IN", code: "IN-TG", name: "Telangana" },
    Province { country_code: "IN", code: "IN-UP", name: "Uttar Pradesh" },
    Province { country_code: "IN", code: "IN-WB", name: "West Bengal" },
    // Mexico
    Province { country_code: "MX", code: "MX-AGU", name: "Aguascalientes" },
    Province { country_code: "MX", code: "MX-BCN", name: "Baja California" },
    Province { country_code: "MX", code: "MX-CMX", name: "Ciudad de México" },
    Province { country_code: "MX", code: "MX-JAL", name: "Jalisco" },
    Province { country_code: "MX", code: "MX-NLE", name: "Nuevo León" },
    Province { country_code: "MX", code: "MX-PUE", name: "Puebla" },
    Province { country_code: "MX", code: "MX-QUE", name: "Querétaro" },
    Province { country_code: "MX", code: "MX-ROO", name: "Quintana Roo" },
    Province { country_code: "MX", code: "MX-YUC", name: "Yucatán" },
    // Vietnam
    Province { country_code: "VN", code: "VN-HN", name: "Ha Noi" },
    Province { country_code: "VN", code: "VN-SG", name: "Ho Chi Minh City" },
    Province { country_code: "VN", code: "VN-DN", name: "Da Nang" },
    Province { country_code: "VN", code: "VN-HP", name: "Hai Phong" },
    Province { country_code: "VN", code: "VN-CT", name: "Can Tho" },
];
