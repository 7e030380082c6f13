//! Reference data compiled into the crate.
//!
//! Counties mirror IRS Notice 2025-31 Appendix 3 (Texas rows); the zip map mirrors the
//! utility service territories used by the lead site. Swap them at runtime through
//! `APP_COUNTY_TABLE` / `APP_UTILITY_TABLE` instead of editing this file.

/// `(fips, name, vintage1, vintage2)`
pub(crate) const TEXAS_ENERGY_COMMUNITY_COUNTIES: &[(&str, &str, bool, bool)] = &[
    ("48001", "Anderson", true, true),
    ("48005", "Angelina", true, true),
    ("48007", "Aransas", true, true),
    ("48015", "Austin", true, true),
    ("48025", "Bee", true, true),
    ("48037", "Bowie", true, true),
    ("48039", "Brazoria", true, true),
    ("48047", "Brooks", true, true),
    ("48057", "Calhoun", true, true),
    ("48063", "Camp", true, true),
    ("48067", "Cass", true, true),
    ("48071", "Chambers", true, true),
    ("48073", "Cherokee", true, true),
    ("48089", "Colorado", true, true),
    ("48093", "Comanche", true, true),
    ("48097", "Cooke", true, true),
    ("48119", "Delta", true, true),
    ("48123", "DeWitt", true, true),
    ("48127", "Dimmit", true, true),
    ("48131", "Duval", true, true),
    ("48133", "Eastland", true, true),
    ("48137", "Edwards", true, true),
    ("48141", "El Paso", true, true),
    ("48143", "Erath", true, true),
    ("48147", "Fannin", true, true),
    ("48157", "Fort Bend", true, true),
    ("48159", "Franklin", true, true),
    ("48163", "Frio", false, true),
    ("48167", "Galveston", true, true),
    ("48175", "Goliad", true, true),
    ("48177", "Gonzales", true, true),
    ("48183", "Gregg", true, true),
    ("48199", "Hardin", true, true),
    ("48201", "Harris", true, true),
    ("48203", "Harrison", true, true),
    ("48213", "Henderson", true, true),
    ("48215", "Hidalgo", true, true),
    ("48221", "Hood", false, true),
    ("48223", "Hopkins", true, true),
    ("48225", "Houston", true, true),
    ("48229", "Hudspeth", true, true),
    ("48237", "Jack", true, true),
    ("48239", "Jackson", true, true),
    ("48241", "Jasper", true, true),
    ("48245", "Jefferson", true, true),
    ("48247", "Jim Hogg", true, true),
    ("48249", "Jim Wells", true, true),
    ("48255", "Karnes", true, true),
    ("48261", "Kenedy", true, true),
    ("48271", "Kinney", true, true),
    ("48273", "Kleberg", true, true),
    ("48277", "Lamar", true, true),
    ("48283", "La Salle", true, true),
    ("48285", "Lavaca", true, true),
    ("48291", "Liberty", true, true),
    ("48297", "Live Oak", true, true),
    ("48311", "McMullen", true, true),
    ("48315", "Marion", true, true),
    ("48321", "Matagorda", true, true),
    ("48323", "Maverick", true, true),
    ("48337", "Montague", true, true),
    ("48339", "Montgomery", true, true),
    ("48343", "Morris", true, true),
    ("48347", "Nacogdoches", true, true),
    ("48349", "Navarro", true, true),
    ("48351", "Newton", true, true),
    ("48355", "Nueces", true, true),
    ("48361", "Orange", true, true),
    ("48363", "Palo Pinto", true, true),
    ("48365", "Panola", true, true),
    ("48373", "Polk", true, true),
    ("48379", "Rains", true, true),
    ("48385", "Real", true, true),
    ("48387", "Red River", true, true),
    ("48391", "Refugio", true, true),
    ("48401", "Rusk", true, true),
    ("48403", "Sabine", true, true),
    ("48405", "San Augustine", true, true),
    ("48407", "San Jacinto", true, true),
    ("48409", "San Patricio", true, true),
    ("48419", "Shelby", true, true),
    ("48425", "Somervell", false, true),
    ("48427", "Starr", true, true),
    ("48429", "Stephens", true, true),
    ("48449", "Titus", true, true),
    ("48455", "Trinity", true, true),
    ("48457", "Tyler", true, true),
    ("48459", "Upshur", true, true),
    ("48463", "Uvalde", true, true),
    ("48465", "Val Verde", true, true),
    ("48467", "Van Zandt", true, true),
    ("48469", "Victoria", true, true),
    ("48473", "Waller", true, true),
    ("48479", "Webb", true, true),
    ("48481", "Wharton", true, true),
    ("48489", "Willacy", true, true),
    ("48499", "Wood", true, true),
    ("48503", "Young", true, true),
    ("48505", "Zapata", true, true),
    ("48507", "Zavala", true, true),
];

/// Exact zip assignments; prefix matching covers everything else.
pub(crate) const TEXAS_ZIP_ASSIGNMENTS: &[(&str, &str)] = &[
    // Houston Metro - Centerpoint
    ("77001", "CENTERPOINT"), ("77002", "CENTERPOINT"), ("77003", "CENTERPOINT"),
    ("77004", "CENTERPOINT"), ("77005", "CENTERPOINT"), ("77006", "CENTERPOINT"),
    ("77007", "CENTERPOINT"), ("77008", "CENTERPOINT"), ("77009", "CENTERPOINT"),
    ("77010", "CENTERPOINT"), ("77019", "CENTERPOINT"), ("77024", "CENTERPOINT"),
    ("77025", "CENTERPOINT"), ("77027", "CENTERPOINT"), ("77030", "CENTERPOINT"),
    ("77040", "CENTERPOINT"), ("77041", "CENTERPOINT"), ("77042", "CENTERPOINT"),
    ("77043", "CENTERPOINT"), ("77044", "CENTERPOINT"), ("77045", "CENTERPOINT"),
    ("77046", "CENTERPOINT"), ("77047", "CENTERPOINT"), ("77048", "CENTERPOINT"),
    ("77049", "CENTERPOINT"), ("77050", "CENTERPOINT"), ("77051", "CENTERPOINT"),
    ("77053", "CENTERPOINT"), ("77054", "CENTERPOINT"), ("77055", "CENTERPOINT"),
    ("77056", "CENTERPOINT"), ("77057", "CENTERPOINT"), ("77058", "CENTERPOINT"),
    ("77059", "CENTERPOINT"), ("77060", "CENTERPOINT"), ("77061", "CENTERPOINT"),
    ("77062", "CENTERPOINT"), ("77063", "CENTERPOINT"), ("77064", "CENTERPOINT"),
    ("77065", "CENTERPOINT"), ("77066", "CENTERPOINT"), ("77067", "CENTERPOINT"),
    ("77068", "CENTERPOINT"), ("77069", "CENTERPOINT"), ("77070", "CENTERPOINT"),
    ("77071", "CENTERPOINT"), ("77072", "CENTERPOINT"), ("77073", "CENTERPOINT"),
    ("77074", "CENTERPOINT"), ("77075", "CENTERPOINT"), ("77076", "CENTERPOINT"),
    ("77077", "CENTERPOINT"), ("77078", "CENTERPOINT"), ("77079", "CENTERPOINT"),
    ("77080", "CENTERPOINT"), ("77081", "CENTERPOINT"), ("77082", "CENTERPOINT"),
    ("77083", "CENTERPOINT"), ("77084", "CENTERPOINT"), ("77085", "CENTERPOINT"),
    ("77086", "CENTERPOINT"), ("77087", "CENTERPOINT"), ("77088", "CENTERPOINT"),
    ("77089", "CENTERPOINT"), ("77090", "CENTERPOINT"), ("77091", "CENTERPOINT"),
    ("77092", "CENTERPOINT"), ("77093", "CENTERPOINT"), ("77094", "CENTERPOINT"),
    ("77095", "CENTERPOINT"), ("77096", "CENTERPOINT"), ("77098", "CENTERPOINT"),
    ("77099", "CENTERPOINT"),
    // Katy
    ("77449", "CENTERPOINT"), ("77450", "CENTERPOINT"), ("77493", "CENTERPOINT"),
    ("77494", "CENTERPOINT"),
    // Sugar Land
    ("77478", "CENTERPOINT"), ("77479", "CENTERPOINT"), ("77498", "CENTERPOINT"),
    // The Woodlands
    ("77380", "CENTERPOINT"), ("77381", "CENTERPOINT"), ("77382", "CENTERPOINT"),
    ("77384", "CENTERPOINT"), ("77385", "CENTERPOINT"), ("77386", "CENTERPOINT"),
    ("77387", "CENTERPOINT"), ("77389", "CENTERPOINT"),
    // Pearland
    ("77581", "CENTERPOINT"), ("77584", "CENTERPOINT"), ("77588", "CENTERPOINT"),
    // League City
    ("77573", "CENTERPOINT"), ("77598", "CENTERPOINT"),
    // Dallas Metro - Oncor
    ("75001", "ONCOR"), ("75002", "ONCOR"), ("75006", "ONCOR"), ("75007", "ONCOR"),
    ("75010", "ONCOR"), ("75013", "ONCOR"), ("75019", "ONCOR"), ("75023", "ONCOR"),
    ("75024", "ONCOR"), ("75025", "ONCOR"), ("75028", "ONCOR"), ("75033", "ONCOR"),
    ("75034", "ONCOR"), ("75035", "ONCOR"), ("75038", "ONCOR"), ("75039", "ONCOR"),
    ("75040", "ONCOR"), ("75041", "ONCOR"), ("75042", "ONCOR"), ("75043", "ONCOR"),
    ("75044", "ONCOR"), ("75048", "ONCOR"), ("75050", "ONCOR"), ("75051", "ONCOR"),
    ("75052", "ONCOR"), ("75054", "ONCOR"), ("75056", "ONCOR"), ("75060", "ONCOR"),
    ("75061", "ONCOR"), ("75062", "ONCOR"), ("75063", "ONCOR"), ("75067", "ONCOR"),
    ("75068", "ONCOR"), ("75069", "ONCOR"), ("75070", "ONCOR"), ("75071", "ONCOR"),
    ("75074", "ONCOR"), ("75075", "ONCOR"), ("75078", "ONCOR"), ("75080", "ONCOR"),
    ("75081", "ONCOR"), ("75082", "ONCOR"), ("75083", "ONCOR"), ("75085", "ONCOR"),
    ("75086", "ONCOR"), ("75087", "ONCOR"), ("75088", "ONCOR"), ("75089", "ONCOR"),
    ("75093", "ONCOR"), ("75094", "ONCOR"), ("75098", "ONCOR"), ("75104", "ONCOR"),
    ("75115", "ONCOR"), ("75116", "ONCOR"), ("75126", "ONCOR"), ("75134", "ONCOR"),
    ("75137", "ONCOR"), ("75141", "ONCOR"), ("75149", "ONCOR"), ("75150", "ONCOR"),
    ("75154", "ONCOR"), ("75159", "ONCOR"), ("75166", "ONCOR"), ("75180", "ONCOR"),
    ("75181", "ONCOR"), ("75182", "ONCOR"), ("75201", "ONCOR"), ("75202", "ONCOR"),
    ("75203", "ONCOR"), ("75204", "ONCOR"), ("75205", "ONCOR"), ("75206", "ONCOR"),
    ("75207", "ONCOR"), ("75208", "ONCOR"), ("75209", "ONCOR"), ("75210", "ONCOR"),
    ("75211", "ONCOR"), ("75212", "ONCOR"), ("75214", "ONCOR"), ("75215", "ONCOR"),
    ("75216", "ONCOR"), ("75217", "ONCOR"), ("75218", "ONCOR"), ("75219", "ONCOR"),
    ("75220", "ONCOR"), ("75223", "ONCOR"), ("75224", "ONCOR"), ("75225", "ONCOR"),
    ("75226", "ONCOR"), ("75227", "ONCOR"), ("75228", "ONCOR"), ("75229", "ONCOR"),
    ("75230", "ONCOR"), ("75231", "ONCOR"), ("75232", "ONCOR"), ("75233", "ONCOR"),
    ("75234", "ONCOR"), ("75235", "ONCOR"), ("75236", "ONCOR"), ("75237", "ONCOR"),
    ("75238", "ONCOR"), ("75240", "ONCOR"), ("75241", "ONCOR"), ("75243", "ONCOR"),
    ("75244", "ONCOR"), ("75246", "ONCOR"), ("75247", "ONCOR"), ("75248", "ONCOR"),
    ("75249", "ONCOR"), ("75252", "ONCOR"), ("75253", "ONCOR"), ("75254", "ONCOR"),
    ("75287", "ONCOR"),
    // Fort Worth
    ("76001", "ONCOR"), ("76002", "ONCOR"), ("76006", "ONCOR"), ("76010", "ONCOR"),
    ("76011", "ONCOR"), ("76012", "ONCOR"), ("76013", "ONCOR"), ("76014", "ONCOR"),
    ("76015", "ONCOR"), ("76016", "ONCOR"), ("76017", "ONCOR"), ("76018", "ONCOR"),
    ("76019", "ONCOR"), ("76101", "ONCOR"), ("76102", "ONCOR"), ("76103", "ONCOR"),
    ("76104", "ONCOR"), ("76105", "ONCOR"), ("76106", "ONCOR"), ("76107", "ONCOR"),
    ("76108", "ONCOR"), ("76109", "ONCOR"), ("76110", "ONCOR"), ("76111", "ONCOR"),
    ("76112", "ONCOR"), ("76114", "ONCOR"), ("76115", "ONCOR"), ("76116", "ONCOR"),
    ("76117", "ONCOR"), ("76118", "ONCOR"), ("76119", "ONCOR"), ("76120", "ONCOR"),
    ("76123", "ONCOR"), ("76126", "ONCOR"), ("76127", "ONCOR"), ("76129", "ONCOR"),
    ("76131", "ONCOR"), ("76132", "ONCOR"), ("76133", "ONCOR"), ("76134", "ONCOR"),
    ("76135", "ONCOR"), ("76137", "ONCOR"), ("76140", "ONCOR"), ("76148", "ONCOR"),
    ("76155", "ONCOR"), ("76177", "ONCOR"), ("76179", "ONCOR"), ("76180", "ONCOR"),
    ("76182", "ONCOR"), ("76244", "ONCOR"), ("76248", "ONCOR"),
];

pub(crate) struct TerritorySeed {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) region: &'static str,
    pub(crate) deregulated: bool,
    pub(crate) energy_community: bool,
    pub(crate) zip_prefixes: &'static [&'static str],
    pub(crate) coverage_areas: &'static [&'static str],
}

/// Declaration order is the prefix-match scan order.
pub(crate) const TEXAS_UTILITY_TERRITORIES: &[TerritorySeed] = &[
    TerritorySeed {
        key: "CENTERPOINT",
        name: "Centerpoint",
        region: "Houston Metro",
        deregulated: true,
        energy_community: true,
        zip_prefixes: &["770", "771", "773", "774", "775", "776", "777"],
        coverage_areas: &[
            "Houston",
            "Katy",
            "Sugar Land",
            "The Woodlands",
            "Pearland",
            "League City",
            "Pasadena",
            "Baytown",
            "Missouri City",
            "Humble",
            "Cypress",
            "Spring",
            "Tomball",
            "Friendswood",
            "Clear Lake",
        ],
    },
    TerritorySeed {
        key: "ONCOR",
        name: "Oncor",
        region: "Dallas-Fort Worth",
        deregulated: true,
        energy_community: false,
        zip_prefixes: &["750", "751", "752", "753", "754", "755", "760", "761", "762"],
        coverage_areas: &[
            "Dallas",
            "Fort Worth",
            "Plano",
            "Arlington",
            "Irving",
            "Frisco",
            "McKinney",
            "Carrollton",
            "Richardson",
            "Denton",
            "Garland",
            "Grand Prairie",
            "Mesquite",
            "Lewisville",
            "Allen",
            "Flower Mound",
        ],
    },
    TerritorySeed {
        key: "TNMP",
        name: "TNMP",
        region: "Multiple Areas",
        deregulated: true,
        energy_community: true,
        zip_prefixes: &["763", "764", "765"],
        coverage_areas: &[
            "Waco",
            "Killeen",
            "Temple",
            "Round Rock",
            "Georgetown",
            "Pflugerville",
            "Cedar Park",
        ],
    },
    TerritorySeed {
        key: "AEP_TEXAS",
        name: "AEP Texas",
        region: "South/West Texas",
        deregulated: true,
        energy_community: false,
        zip_prefixes: &["783", "784", "785", "786", "787", "788"],
        coverage_areas: &["Corpus Christi", "Victoria", "Laredo", "McAllen"],
    },
];
