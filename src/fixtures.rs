/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app without a json-server for screenshots and debugging
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The fixtures are 60 real countries, already sorted by name as the listing
/// endpoint would return them.
use crate::types::{Country, Currency, Language};

/// name, code, capital, region, (currency code, name, symbol), (language code, name)
type CountryRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    (&'static str, &'static str, Option<&'static str>),
    (&'static str, &'static str),
);

const COUNTRIES: &[CountryRow] = &[
    ("Afghanistan", "AF", "Kabul", "AS", ("AFN", "Afghan afghani", Some("؋")), ("ps", "Pashto")),
    ("Albania", "AL", "Tirana", "EU", ("ALL", "Albanian lek", Some("L")), ("sq", "Albanian")),
    ("Algeria", "DZ", "Algiers", "AF", ("DZD", "Algerian dinar", Some("د.ج")), ("ar", "Arabic")),
    ("Andorra", "AD", "Andorra la Vella", "EU", ("EUR", "Euro", Some("€")), ("ca", "Catalan")),
    ("Angola", "AO", "Luanda", "AF", ("AOA", "Angolan kwanza", Some("Kz")), ("pt", "Portuguese")),
    ("Argentina", "AR", "Buenos Aires", "SA", ("ARS", "Argentine peso", Some("$")), ("es", "Spanish")),
    ("Armenia", "AM", "Yerevan", "AS", ("AMD", "Armenian dram", None), ("hy", "Armenian")),
    ("Australia", "AU", "Canberra", "OC", ("AUD", "Australian dollar", Some("$")), ("en", "English")),
    ("Austria", "AT", "Vienna", "EU", ("EUR", "Euro", Some("€")), ("de", "German")),
    ("Belgium", "BE", "Brussels", "EU", ("EUR", "Euro", Some("€")), ("nl", "Dutch")),
    ("Benin", "BJ", "Porto-Novo", "AF", ("XOF", "West African CFA franc", Some("Fr")), ("fr", "French")),
    ("Bolivia", "BO", "Sucre", "SA", ("BOB", "Bolivian boliviano", Some("Bs.")), ("es", "Spanish")),
    ("Brazil", "BR", "Brasília", "SA", ("BRL", "Brazilian real", Some("R$")), ("pt", "Portuguese")),
    ("Burkina Faso", "BF", "Ouagadougou", "AF", ("XOF", "West African CFA franc", Some("Fr")), ("fr", "French")),
    ("Cameroon", "CM", "Yaoundé", "AF", ("XAF", "Central African CFA franc", Some("Fr")), ("en", "English")),
    ("Canada", "CA", "Ottawa", "NA", ("CAD", "Canadian dollar", Some("$")), ("en", "English")),
    ("Chile", "CL", "Santiago", "SA", ("CLP", "Chilean peso", Some("$")), ("es", "Spanish")),
    ("China", "CN", "Beijing", "AS", ("CNY", "Chinese yuan", Some("¥")), ("zh", "Chinese")),
    ("Colombia", "CO", "Bogotá", "SA", ("COP", "Colombian peso", Some("$")), ("es", "Spanish")),
    ("Costa Rica", "CR", "San José", "NA", ("CRC", "Costa Rican colón", Some("₡")), ("es", "Spanish")),
    ("Croatia", "HR", "Zagreb", "EU", ("HRK", "Croatian kuna", Some("kn")), ("hr", "Croatian")),
    ("Cuba", "CU", "Havana", "NA", ("CUC", "Cuban convertible peso", Some("$")), ("es", "Spanish")),
    ("Czech Republic", "CZ", "Prague", "EU", ("CZK", "Czech koruna", Some("Kč")), ("cs", "Czech")),
    ("Denmark", "DK", "Copenhagen", "EU", ("DKK", "Danish krone", Some("kr")), ("da", "Danish")),
    ("Egypt", "EG", "Cairo", "AF", ("EGP", "Egyptian pound", Some("£")), ("ar", "Arabic")),
    ("Estonia", "EE", "Tallinn", "EU", ("EUR", "Euro", Some("€")), ("et", "Estonian")),
    ("Finland", "FI", "Helsinki", "EU", ("EUR", "Euro", Some("€")), ("fi", "Finnish")),
    ("France", "FR", "Paris", "EU", ("EUR", "Euro", Some("€")), ("fr", "French")),
    ("French Guiana", "GF", "Cayenne", "SA", ("EUR", "Euro", Some("€")), ("fr", "French")),
    ("French Polynesia", "PF", "Papeetē", "OC", ("XPF", "CFP franc", Some("Fr")), ("fr", "French")),
    ("Germany", "DE", "Berlin", "EU", ("EUR", "Euro", Some("€")), ("de", "German")),
    ("Ghana", "GH", "Accra", "AF", ("GHS", "Ghanaian cedi", Some("₵")), ("en", "English")),
    ("Greece", "GR", "Athens", "EU", ("EUR", "Euro", Some("€")), ("el", "Greek")),
    ("Hungary", "HU", "Budapest", "EU", ("HUF", "Hungarian forint", Some("Ft")), ("hu", "Hungarian")),
    ("Iceland", "IS", "Reykjavík", "EU", ("ISK", "Icelandic króna", Some("kr")), ("is", "Icelandic")),
    ("India", "IN", "New Delhi", "AS", ("INR", "Indian rupee", Some("₹")), ("hi", "Hindi")),
    ("Ireland", "IE", "Dublin", "EU", ("EUR", "Euro", Some("€")), ("ga", "Irish")),
    ("Italy", "IT", "Rome", "EU", ("EUR", "Euro", Some("€")), ("it", "Italian")),
    ("Japan", "JP", "Tokyo", "AS", ("JPY", "Japanese yen", Some("¥")), ("ja", "Japanese")),
    ("Kenya", "KE", "Nairobi", "AF", ("KES", "Kenyan shilling", Some("Sh")), ("en", "English")),
    ("Luxembourg", "LU", "Luxembourg", "EU", ("EUR", "Euro", Some("€")), ("fr", "French")),
    ("Mexico", "MX", "Mexico City", "NA", ("MXN", "Mexican peso", Some("$")), ("es", "Spanish")),
    ("Monaco", "MC", "Monaco", "EU", ("EUR", "Euro", Some("€")), ("fr", "French")),
    ("Morocco", "MA", "Rabat", "AF", ("MAD", "Moroccan dirham", Some("د.م.")), ("ar", "Arabic")),
    ("Netherlands", "NL", "Amsterdam", "EU", ("EUR", "Euro", Some("€")), ("nl", "Dutch")),
    ("New Zealand", "NZ", "Wellington", "OC", ("NZD", "New Zealand dollar", Some("$")), ("en", "English")),
    ("Nigeria", "NG", "Abuja", "AF", ("NGN", "Nigerian naira", Some("₦")), ("en", "English")),
    ("Norway", "NO", "Oslo", "EU", ("NOK", "Norwegian krone", Some("kr")), ("no", "Norwegian")),
    ("Peru", "PE", "Lima", "SA", ("PEN", "Peruvian sol", Some("S/.")), ("es", "Spanish")),
    ("Poland", "PL", "Warsaw", "EU", ("PLN", "Polish złoty", Some("zł")), ("pl", "Polish")),
    ("Portugal", "PT", "Lisbon", "EU", ("EUR", "Euro", Some("€")), ("pt", "Portuguese")),
    ("Senegal", "SN", "Dakar", "AF", ("XOF", "West African CFA franc", Some("Fr")), ("fr", "French")),
    ("South Africa", "ZA", "Pretoria", "AF", ("ZAR", "South African rand", Some("R")), ("en", "English")),
    ("Spain", "ES", "Madrid", "EU", ("EUR", "Euro", Some("€")), ("es", "Spanish")),
    ("Sweden", "SE", "Stockholm", "EU", ("SEK", "Swedish krona", Some("kr")), ("sv", "Swedish")),
    ("Switzerland", "CH", "Bern", "EU", ("CHF", "Swiss franc", Some("Fr")), ("de", "German")),
    ("Tunisia", "TN", "Tunis", "AF", ("TND", "Tunisian dinar", Some("د.ت")), ("ar", "Arabic")),
    ("United Kingdom", "GB", "London", "EU", ("GBP", "British pound", Some("£")), ("en", "English")),
    ("United States of America", "US", "Washington, D.C.", "NA", ("USD", "United States dollar", Some("$")), ("en", "English")),
    ("Vietnam", "VN", "Hanoi", "AS", ("VND", "Vietnamese đồng", Some("₫")), ("vi", "Vietnamese")),
];

/// Create the full mock country list, sorted by name
pub fn create_mock_countries() -> Vec<Country> {
    COUNTRIES
        .iter()
        .map(|&(name, code, capital, region, (cur_code, cur_name, symbol), (lang_code, lang_name))| Country {
            name: name.to_string(),
            code: code.to_string(),
            capital: capital.to_string(),
            region: region.to_string(),
            currency: Currency {
                code: cur_code.to_string(),
                name: cur_name.to_string(),
                symbol: symbol.map(str::to_string),
            },
            language: Language {
                code: lang_code.to_string(),
                name: lang_name.to_string(),
            },
            flag: flag_url(code),
        })
        .collect()
}

/// Create a single country with the fields the table shows
pub fn create_test_country(
    name: &str,
    code: &str,
    capital: &str,
    currency_name: &str,
    currency_symbol: Option<&str>,
    language_name: &str,
) -> Country {
    Country {
        name: name.to_string(),
        code: code.to_string(),
        capital: capital.to_string(),
        region: String::new(),
        currency: Currency {
            code: String::new(),
            name: currency_name.to_string(),
            symbol: currency_symbol.map(str::to_string),
        },
        language: Language {
            code: String::new(),
            name: language_name.to_string(),
        },
        flag: flag_url(code),
    }
}

fn flag_url(code: &str) -> String {
    format!("https://flags.example/{}.svg", code.to_lowercase())
}
