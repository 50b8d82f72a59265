//! ISO 3166-1 country table.
//!
//! Names follow the ISO short names; `aka` lists the spellings people
//! actually type (ASCII forms of accented names, common short forms).

use super::Country;

const fn c(name: &'static str, alpha_2: &'static str, alpha_3: &'static str) -> Country {
    Country::new(name, alpha_2, alpha_3)
}

pub(super) static COUNTRIES: &[Country] = &[
    c("Afghanistan", "AF", "AFG").official("Islamic Republic of Afghanistan"),
    c("Åland Islands", "AX", "ALA").aka(&["Aland Islands"]),
    c("Albania", "AL", "ALB").official("Republic of Albania"),
    c("Algeria", "DZ", "DZA").official("People's Democratic Republic of Algeria"),
    c("American Samoa", "AS", "ASM"),
    c("Andorra", "AD", "AND").official("Principality of Andorra"),
    c("Angola", "AO", "AGO").official("Republic of Angola"),
    c("Anguilla", "AI", "AIA"),
    c("Antarctica", "AQ", "ATA"),
    c("Antigua and Barbuda", "AG", "ATG"),
    c("Argentina", "AR", "ARG").official("Argentine Republic"),
    c("Armenia", "AM", "ARM").official("Republic of Armenia"),
    c("Aruba", "AW", "ABW"),
    c("Australia", "AU", "AUS"),
    c("Austria", "AT", "AUT").official("Republic of Austria"),
    c("Azerbaijan", "AZ", "AZE").official("Republic of Azerbaijan"),
    c("Bahamas", "BS", "BHS").official("Commonwealth of the Bahamas").aka(&["The Bahamas"]),
    c("Bahrain", "BH", "BHR").official("Kingdom of Bahrain"),
    c("Bangladesh", "BD", "BGD").official("People's Republic of Bangladesh"),
    c("Barbados", "BB", "BRB"),
    c("Belarus", "BY", "BLR").official("Republic of Belarus"),
    c("Belgium", "BE", "BEL").official("Kingdom of Belgium"),
    c("Belize", "BZ", "BLZ"),
    c("Benin", "BJ", "BEN").official("Republic of Benin"),
    c("Bermuda", "BM", "BMU"),
    c("Bhutan", "BT", "BTN").official("Kingdom of Bhutan"),
    c("Bolivia, Plurinational State of", "BO", "BOL")
        .official("Plurinational State of Bolivia")
        .aka(&["Bolivia"]),
    c("Bonaire, Sint Eustatius and Saba", "BQ", "BES").aka(&["Caribbean Netherlands"]),
    c("Bosnia and Herzegovina", "BA", "BIH").aka(&["Bosnia"]),
    c("Botswana", "BW", "BWA").official("Republic of Botswana"),
    c("Bouvet Island", "BV", "BVT"),
    c("Brazil", "BR", "BRA").official("Federative Republic of Brazil"),
    c("British Indian Ocean Territory", "IO", "IOT"),
    c("Brunei Darussalam", "BN", "BRN").aka(&["Brunei"]),
    c("Bulgaria", "BG", "BGR").official("Republic of Bulgaria"),
    c("Burkina Faso", "BF", "BFA"),
    c("Burundi", "BI", "BDI").official("Republic of Burundi"),
    c("Cabo Verde", "CV", "CPV").official("Republic of Cabo Verde").aka(&["Cape Verde"]),
    c("Cambodia", "KH", "KHM").official("Kingdom of Cambodia"),
    c("Cameroon", "CM", "CMR").official("Republic of Cameroon"),
    c("Canada", "CA", "CAN"),
    c("Cayman Islands", "KY", "CYM"),
    c("Central African Republic", "CF", "CAF"),
    c("Chad", "TD", "TCD").official("Republic of Chad"),
    c("Chile", "CL", "CHL").official("Republic of Chile"),
    c("China", "CN", "CHN").official("People's Republic of China"),
    c("Christmas Island", "CX", "CXR"),
    c("Cocos (Keeling) Islands", "CC", "CCK").aka(&["Cocos Islands"]),
    c("Colombia", "CO", "COL").official("Republic of Colombia"),
    c("Comoros", "KM", "COM").official("Union of the Comoros"),
    c("Congo", "CG", "COG")
        .official("Republic of the Congo")
        .aka(&["Congo-Brazzaville"]),
    c("Congo, The Democratic Republic of the", "CD", "COD")
        .aka(&["Democratic Republic of the Congo", "DR Congo", "DRC", "Congo-Kinshasa"]),
    c("Cook Islands", "CK", "COK"),
    c("Costa Rica", "CR", "CRI").official("Republic of Costa Rica"),
    c("Côte d'Ivoire", "CI", "CIV")
        .official("Republic of Côte d'Ivoire")
        .aka(&["Cote d'Ivoire", "Ivory Coast"]),
    c("Croatia", "HR", "HRV").official("Republic of Croatia"),
    c("Cuba", "CU", "CUB").official("Republic of Cuba"),
    c("Curaçao", "CW", "CUW").aka(&["Curacao"]),
    c("Cyprus", "CY", "CYP").official("Republic of Cyprus"),
    c("Czechia", "CZ", "CZE").official("Czech Republic"),
    c("Denmark", "DK", "DNK").official("Kingdom of Denmark"),
    c("Djibouti", "DJ", "DJI").official("Republic of Djibouti"),
    c("Dominica", "DM", "DMA").official("Commonwealth of Dominica"),
    c("Dominican Republic", "DO", "DOM"),
    c("Ecuador", "EC", "ECU").official("Republic of Ecuador"),
    c("Egypt", "EG", "EGY").official("Arab Republic of Egypt"),
    c("El Salvador", "SV", "SLV").official("Republic of El Salvador"),
    c("Equatorial Guinea", "GQ", "GNQ").official("Republic of Equatorial Guinea"),
    c("Eritrea", "ER", "ERI").official("the State of Eritrea"),
    c("Estonia", "EE", "EST").official("Republic of Estonia"),
    c("Eswatini", "SZ", "SWZ").official("Kingdom of Eswatini").aka(&["Swaziland"]),
    c("Ethiopia", "ET", "ETH").official("Federal Democratic Republic of Ethiopia"),
    c("Falkland Islands (Malvinas)", "FK", "FLK").aka(&["Falkland Islands"]),
    c("Faroe Islands", "FO", "FRO"),
    c("Fiji", "FJ", "FJI").official("Republic of Fiji"),
    c("Finland", "FI", "FIN").official("Republic of Finland"),
    c("France", "FR", "FRA").official("French Republic"),
    c("French Guiana", "GF", "GUF"),
    c("French Polynesia", "PF", "PYF"),
    c("French Southern Territories", "TF", "ATF"),
    c("Gabon", "GA", "GAB").official("Gabonese Republic"),
    c("Gambia", "GM", "GMB").official("Republic of the Gambia").aka(&["The Gambia"]),
    c("Georgia", "GE", "GEO"),
    c("Germany", "DE", "DEU").official("Federal Republic of Germany"),
    c("Ghana", "GH", "GHA").official("Republic of Ghana"),
    c("Gibraltar", "GI", "GIB"),
    c("Greece", "GR", "GRC").official("Hellenic Republic"),
    c("Greenland", "GL", "GRL"),
    c("Grenada", "GD", "GRD"),
    c("Guadeloupe", "GP", "GLP"),
    c("Guam", "GU", "GUM"),
    c("Guatemala", "GT", "GTM").official("Republic of Guatemala"),
    c("Guernsey", "GG", "GGY"),
    c("Guinea", "GN", "GIN").official("Republic of Guinea"),
    c("Guinea-Bissau", "GW", "GNB").official("Republic of Guinea-Bissau"),
    c("Guyana", "GY", "GUY").official("Republic of Guyana"),
    c("Haiti", "HT", "HTI").official("Republic of Haiti"),
    c("Heard Island and McDonald Islands", "HM", "HMD"),
    c("Holy See (Vatican City State)", "VA", "VAT").aka(&["Vatican City", "Vatican", "Holy See"]),
    c("Honduras", "HN", "HND").official("Republic of Honduras"),
    c("Hong Kong", "HK", "HKG")
        .official("Hong Kong Special Administrative Region of China"),
    c("Hungary", "HU", "HUN"),
    c("Iceland", "IS", "ISL").official("Republic of Iceland"),
    c("India", "IN", "IND").official("Republic of India"),
    c("Indonesia", "ID", "IDN").official("Republic of Indonesia"),
    c("Iran, Islamic Republic of", "IR", "IRN")
        .official("Islamic Republic of Iran")
        .aka(&["Iran"]),
    c("Iraq", "IQ", "IRQ").official("Republic of Iraq"),
    c("Ireland", "IE", "IRL"),
    c("Isle of Man", "IM", "IMN"),
    c("Israel", "IL", "ISR").official("State of Israel"),
    c("Italy", "IT", "ITA").official("Italian Republic"),
    c("Jamaica", "JM", "JAM"),
    c("Japan", "JP", "JPN"),
    c("Jersey", "JE", "JEY"),
    c("Jordan", "JO", "JOR").official("Hashemite Kingdom of Jordan"),
    c("Kazakhstan", "KZ", "KAZ").official("Republic of Kazakhstan"),
    c("Kenya", "KE", "KEN").official("Republic of Kenya"),
    c("Kiribati", "KI", "KIR").official("Republic of Kiribati"),
    c("Korea, Democratic People's Republic of", "KP", "PRK")
        .official("Democratic People's Republic of Korea")
        .aka(&["North Korea"]),
    c("Korea, Republic of", "KR", "KOR").aka(&["South Korea", "Korea"]),
    c("Kuwait", "KW", "KWT").official("State of Kuwait"),
    c("Kyrgyzstan", "KG", "KGZ").official("Kyrgyz Republic"),
    c("Lao People's Democratic Republic", "LA", "LAO").aka(&["Laos"]),
    c("Latvia", "LV", "LVA").official("Republic of Latvia"),
    c("Lebanon", "LB", "LBN").official("Lebanese Republic"),
    c("Lesotho", "LS", "LSO").official("Kingdom of Lesotho"),
    c("Liberia", "LR", "LBR").official("Republic of Liberia"),
    c("Libya", "LY", "LBY").official("State of Libya"),
    c("Liechtenstein", "LI", "LIE").official("Principality of Liechtenstein"),
    c("Lithuania", "LT", "LTU").official("Republic of Lithuania"),
    c("Luxembourg", "LU", "LUX").official("Grand Duchy of Luxembourg"),
    c("Macao", "MO", "MAC")
        .official("Macao Special Administrative Region of China")
        .aka(&["Macau"]),
    c("Madagascar", "MG", "MDG").official("Republic of Madagascar"),
    c("Malawi", "MW", "MWI").official("Republic of Malawi"),
    c("Malaysia", "MY", "MYS"),
    c("Maldives", "MV", "MDV").official("Republic of Maldives"),
    c("Mali", "ML", "MLI").official("Republic of Mali"),
    c("Malta", "MT", "MLT").official("Republic of Malta"),
    c("Marshall Islands", "MH", "MHL").official("Republic of the Marshall Islands"),
    c("Martinique", "MQ", "MTQ"),
    c("Mauritania", "MR", "MRT").official("Islamic Republic of Mauritania"),
    c("Mauritius", "MU", "MUS").official("Republic of Mauritius"),
    c("Mayotte", "YT", "MYT"),
    c("Mexico", "MX", "MEX").official("United Mexican States"),
    c("Micronesia, Federated States of", "FM", "FSM")
        .official("Federated States of Micronesia")
        .aka(&["Micronesia"]),
    c("Moldova, Republic of", "MD", "MDA")
        .official("Republic of Moldova")
        .aka(&["Moldova"]),
    c("Monaco", "MC", "MCO").official("Principality of Monaco"),
    c("Mongolia", "MN", "MNG"),
    c("Montenegro", "ME", "MNE"),
    c("Montserrat", "MS", "MSR"),
    c("Morocco", "MA", "MAR").official("Kingdom of Morocco"),
    c("Mozambique", "MZ", "MOZ").official("Republic of Mozambique"),
    c("Myanmar", "MM", "MMR").official("Republic of Myanmar").aka(&["Burma"]),
    c("Namibia", "NA", "NAM").official("Republic of Namibia"),
    c("Nauru", "NR", "NRU").official("Republic of Nauru"),
    c("Nepal", "NP", "NPL").official("Federal Democratic Republic of Nepal"),
    c("Netherlands", "NL", "NLD")
        .official("Kingdom of the Netherlands")
        .aka(&["Holland", "The Netherlands"]),
    c("New Caledonia", "NC", "NCL"),
    c("New Zealand", "NZ", "NZL"),
    c("Nicaragua", "NI", "NIC").official("Republic of Nicaragua"),
    c("Niger", "NE", "NER").official("Republic of the Niger"),
    c("Nigeria", "NG", "NGA").official("Federal Republic of Nigeria"),
    c("Niue", "NU", "NIU"),
    c("Norfolk Island", "NF", "NFK"),
    c("North Macedonia", "MK", "MKD")
        .official("Republic of North Macedonia")
        .aka(&["Macedonia"]),
    c("Northern Mariana Islands", "MP", "MNP")
        .official("Commonwealth of the Northern Mariana Islands"),
    c("Norway", "NO", "NOR").official("Kingdom of Norway"),
    c("Oman", "OM", "OMN").official("Sultanate of Oman"),
    c("Pakistan", "PK", "PAK").official("Islamic Republic of Pakistan"),
    c("Palau", "PW", "PLW").official("Republic of Palau"),
    c("Palestine, State of", "PS", "PSE")
        .official("the State of Palestine")
        .aka(&["Palestine"]),
    c("Panama", "PA", "PAN").official("Republic of Panama"),
    c("Papua New Guinea", "PG", "PNG").official("Independent State of Papua New Guinea"),
    c("Paraguay", "PY", "PRY").official("Republic of Paraguay"),
    c("Peru", "PE", "PER").official("Republic of Peru"),
    c("Philippines", "PH", "PHL").official("Republic of the Philippines"),
    c("Pitcairn", "PN", "PCN").aka(&["Pitcairn Islands"]),
    c("Poland", "PL", "POL").official("Republic of Poland"),
    c("Portugal", "PT", "PRT").official("Portuguese Republic"),
    c("Puerto Rico", "PR", "PRI"),
    c("Qatar", "QA", "QAT").official("State of Qatar"),
    c("Réunion", "RE", "REU").aka(&["Reunion"]),
    c("Romania", "RO", "ROU"),
    c("Russian Federation", "RU", "RUS").aka(&["Russia"]),
    c("Rwanda", "RW", "RWA").official("Rwandese Republic"),
    c("Saint Barthélemy", "BL", "BLM").aka(&["Saint Barthelemy", "St. Barts"]),
    c("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN").aka(&["Saint Helena"]),
    c("Saint Kitts and Nevis", "KN", "KNA").aka(&["St. Kitts and Nevis"]),
    c("Saint Lucia", "LC", "LCA").aka(&["St. Lucia"]),
    c("Saint Martin (French part)", "MF", "MAF").aka(&["Saint Martin"]),
    c("Saint Pierre and Miquelon", "PM", "SPM"),
    c("Saint Vincent and the Grenadines", "VC", "VCT")
        .aka(&["St. Vincent and the Grenadines"]),
    c("Samoa", "WS", "WSM").official("Independent State of Samoa"),
    c("San Marino", "SM", "SMR").official("Republic of San Marino"),
    c("Sao Tome and Principe", "ST", "STP").official("Democratic Republic of Sao Tome and Principe"),
    c("Saudi Arabia", "SA", "SAU").official("Kingdom of Saudi Arabia"),
    c("Senegal", "SN", "SEN").official("Republic of Senegal"),
    c("Serbia", "RS", "SRB").official("Republic of Serbia"),
    c("Seychelles", "SC", "SYC").official("Republic of Seychelles"),
    c("Sierra Leone", "SL", "SLE").official("Republic of Sierra Leone"),
    c("Singapore", "SG", "SGP").official("Republic of Singapore"),
    c("Sint Maarten (Dutch part)", "SX", "SXM").aka(&["Sint Maarten"]),
    c("Slovakia", "SK", "SVK").official("Slovak Republic"),
    c("Slovenia", "SI", "SVN").official("Republic of Slovenia"),
    c("Solomon Islands", "SB", "SLB"),
    c("Somalia", "SO", "SOM").official("Federal Republic of Somalia"),
    c("South Africa", "ZA", "ZAF").official("Republic of South Africa"),
    c("South Georgia and the South Sandwich Islands", "GS", "SGS"),
    c("South Sudan", "SS", "SSD").official("Republic of South Sudan"),
    c("Spain", "ES", "ESP").official("Kingdom of Spain"),
    c("Sri Lanka", "LK", "LKA").official("Democratic Socialist Republic of Sri Lanka"),
    c("Sudan", "SD", "SDN").official("Republic of the Sudan"),
    c("Suriname", "SR", "SUR").official("Republic of Suriname"),
    c("Svalbard and Jan Mayen", "SJ", "SJM"),
    c("Sweden", "SE", "SWE").official("Kingdom of Sweden"),
    c("Switzerland", "CH", "CHE").official("Swiss Confederation"),
    c("Syrian Arab Republic", "SY", "SYR").aka(&["Syria"]),
    c("Taiwan, Province of China", "TW", "TWN").aka(&["Taiwan"]),
    c("Tajikistan", "TJ", "TJK").official("Republic of Tajikistan"),
    c("Tanzania, United Republic of", "TZ", "TZA")
        .official("United Republic of Tanzania")
        .aka(&["Tanzania"]),
    c("Thailand", "TH", "THA").official("Kingdom of Thailand"),
    c("Timor-Leste", "TL", "TLS")
        .official("Democratic Republic of Timor-Leste")
        .aka(&["East Timor"]),
    c("Togo", "TG", "TGO").official("Togolese Republic"),
    c("Tokelau", "TK", "TKL"),
    c("Tonga", "TO", "TON").official("Kingdom of Tonga"),
    c("Trinidad and Tobago", "TT", "TTO").official("Republic of Trinidad and Tobago"),
    c("Tunisia", "TN", "TUN").official("Republic of Tunisia"),
    c("Türkiye", "TR", "TUR")
        .official("Republic of Türkiye")
        .aka(&["Turkey", "Turkiye"]),
    c("Turkmenistan", "TM", "TKM"),
    c("Turks and Caicos Islands", "TC", "TCA"),
    c("Tuvalu", "TV", "TUV"),
    c("Uganda", "UG", "UGA").official("Republic of Uganda"),
    c("Ukraine", "UA", "UKR"),
    c("United Arab Emirates", "AE", "ARE").aka(&["UAE"]),
    c("United Kingdom", "GB", "GBR")
        .official("United Kingdom of Great Britain and Northern Ireland")
        .aka(&["UK", "Great Britain", "Britain"]),
    c("United States", "US", "USA")
        .official("United States of America")
        .aka(&["America"]),
    c("United States Minor Outlying Islands", "UM", "UMI"),
    c("Uruguay", "UY", "URY").official("Eastern Republic of Uruguay"),
    c("Uzbekistan", "UZ", "UZB").official("Republic of Uzbekistan"),
    c("Vanuatu", "VU", "VUT").official("Republic of Vanuatu"),
    c("Venezuela, Bolivarian Republic of", "VE", "VEN")
        .official("Bolivarian Republic of Venezuela")
        .aka(&["Venezuela"]),
    c("Viet Nam", "VN", "VNM")
        .official("Socialist Republic of Viet Nam")
        .aka(&["Vietnam"]),
    c("Virgin Islands, British", "VG", "VGB").aka(&["British Virgin Islands"]),
    c("Virgin Islands, U.S.", "VI", "VIR")
        .official("Virgin Islands of the United States")
        .aka(&["US Virgin Islands"]),
    c("Wallis and Futuna", "WF", "WLF"),
    c("Western Sahara", "EH", "ESH"),
    c("Yemen", "YE", "YEM").official("Republic of Yemen"),
    c("Zambia", "ZM", "ZMB").official("Republic of Zambia"),
    c("Zimbabwe", "ZW", "ZWE").official("Republic of Zimbabwe"),
];
