//! Compiled-in city data (2011 census figures, top 50 cities by population).
//!
//! Ids are population ranks. Density is derived from population and area
//! when the row is built so the stored metric always agrees with the figures
//! next to it.

use crate::model::{CityRecord, Region};

#[allow(clippy::too_many_arguments)]
fn city(
    id: u32,
    name: &str,
    state: &str,
    region: Region,
    total_population: u64,
    male_population: u64,
    area: f64,
    literacy_rate: f64,
    established_year: i32,
    population_growth: Option<f64>,
    urban_area: Option<&str>,
) -> CityRecord {
    CityRecord {
        id,
        name: name.to_string(),
        state: state.to_string(),
        region,
        total_population,
        male_population,
        female_population: total_population.saturating_sub(male_population),
        area,
        population_density: (total_population as f64 / area).round(),
        literacy_rate,
        established_year,
        population_growth,
        urban_area: urban_area.map(str::to_string),
    }
}

/// Build the bundled city rows in rank order.
pub fn cities() -> Vec<CityRecord> {
    use Region::*;

    vec![
        city(1, "Mumbai", "Maharashtra", West, 12_442_373, 6_715_931, 603.4, 89.73, 1507, Some(0.0387), Some("Mumbai Metropolitan Region")),
        city(2, "Delhi", "Delhi", North, 11_034_555, 5_872_644, 1484.0, 86.34, 1052, Some(0.2122), Some("National Capital Region")),
        city(3, "Bengaluru", "Karnataka", South, 8_443_675, 4_391_723, 741.0, 88.71, 1537, Some(0.4768), Some("Bengaluru Urban")),
        city(4, "Hyderabad", "Telangana", South, 6_731_790, 3_500_802, 650.0, 83.26, 1591, Some(0.0407), Some("Hyderabad Metropolitan Region")),
        city(5, "Ahmedabad", "Gujarat", West, 5_577_940, 2_938_985, 464.0, 88.29, 1411, Some(0.2280), Some("Ahmedabad Urban Agglomeration")),
        city(6, "Chennai", "Tamil Nadu", South, 4_646_732, 2_335_844, 426.0, 90.18, 1639, Some(0.0709), Some("Chennai Metropolitan Area")),
        city(7, "Kolkata", "West Bengal", East, 4_496_694, 2_356_766, 206.1, 86.31, 1690, Some(-0.0193), Some("Kolkata Metropolitan Area")),
        city(8, "Surat", "Gujarat", West, 4_467_797, 2_543_721, 326.5, 87.89, 1520, Some(0.5500), Some("Surat Urban Agglomeration")),
        city(9, "Pune", "Maharashtra", West, 3_124_458, 1_603_675, 331.3, 91.61, 847, Some(0.2269), Some("Pune Metropolitan Region")),
        city(10, "Jaipur", "Rajasthan", North, 3_046_163, 1_603_125, 467.0, 84.34, 1727, Some(0.3136), Some("Jaipur Urban Agglomeration")),
        city(11, "Lucknow", "Uttar Pradesh", North, 2_817_105, 1_470_133, 631.0, 84.72, 1775, Some(0.2516), Some("Lucknow Urban Agglomeration")),
        city(12, "Kanpur", "Uttar Pradesh", North, 2_765_348, 1_469_516, 403.7, 84.14, 1207, Some(0.0783), Some("Kanpur Urban Agglomeration")),
        city(13, "Nagpur", "Maharashtra", Central, 2_405_665, 1_226_610, 217.6, 91.92, 1702, Some(0.1451), Some("Nagpur Metropolitan Region")),
        city(14, "Indore", "Madhya Pradesh", Central, 1_964_086, 1_016_842, 530.0, 87.38, 1715, Some(0.3298), Some("Indore Urban Agglomeration")),
        city(15, "Thane", "Maharashtra", West, 1_841_488, 966_278, 147.0, 89.32, 1200, Some(0.3612), Some("Mumbai Metropolitan Region")),
        city(16, "Bhopal", "Madhya Pradesh", Central, 1_798_218, 936_168, 463.0, 85.24, 1707, Some(0.2807), Some("Bhopal Urban Agglomeration")),
        city(17, "Visakhapatnam", "Andhra Pradesh", South, 1_728_128, 868_222, 681.9, 82.66, 1800, Some(0.5889), Some("Visakhapatnam Metropolitan Region")),
        city(18, "Pimpri-Chinchwad", "Maharashtra", West, 1_727_692, 925_145, 181.0, 89.22, 1970, Some(0.7050), Some("Pune Metropolitan Region")),
        city(19, "Patna", "Bihar", East, 1_684_222, 894_158, 136.0, 84.71, 1541, Some(0.2261), Some("Patna Urban Agglomeration")),
        city(20, "Vadodara", "Gujarat", West, 1_670_806, 864_332, 235.0, 90.63, 1721, Some(0.2286), Some("Vadodara Urban Agglomeration")),
        city(21, "Ghaziabad", "Uttar Pradesh", North, 1_648_643, 875_303, 210.0, 85.00, 1740, Some(0.4252), Some("National Capital Region")),
        city(22, "Ludhiana", "Punjab", North, 1_618_879, 876_656, 310.0, 86.02, 1480, Some(0.1154), None),
        city(23, "Agra", "Uttar Pradesh", North, 1_585_704, 842_840, 188.4, 73.11, 1504, Some(0.2258), Some("Agra Urban Agglomeration")),
        city(24, "Nashik", "Maharashtra", West, 1_486_053, 782_517, 259.1, 89.85, 1680, Some(0.3085), Some("Nashik Urban Agglomeration")),
        city(25, "Faridabad", "Haryana", North, 1_414_050, 760_321, 742.9, 83.04, 1607, Some(0.3269), Some("National Capital Region")),
        city(26, "Meerut", "Uttar Pradesh", North, 1_305_429, 690_017, 141.9, 74.80, 1800, Some(0.0998), None),
        city(27, "Rajkot", "Gujarat", West, 1_286_678, 667_845, 170.0, 87.96, 1612, Some(0.3000), Some("Rajkot Urban Agglomeration")),
        city(28, "Kalyan-Dombivli", "Maharashtra", West, 1_247_327, 647_719, 137.0, 91.72, 1983, Some(0.0954), Some("Mumbai Metropolitan Region")),
        city(29, "Vasai-Virar", "Maharashtra", West, 1_222_390, 647_451, 311.0, 88.74, 2009, None, None),
        city(30, "Varanasi", "Uttar Pradesh", North, 1_198_491, 630_939, 82.1, 77.05, 1100, Some(0.1764), Some("Varanasi Urban Agglomeration")),
        city(31, "Srinagar", "Jammu and Kashmir", North, 1_180_570, 625_790, 294.0, 71.21, 1585, Some(0.1376), None),
        city(32, "Aurangabad", "Maharashtra", West, 1_175_116, 609_206, 138.5, 87.53, 1610, Some(0.1945), None),
        city(33, "Dhanbad", "Jharkhand", East, 1_162_472, 612_331, 275.0, 87.47, 1956, None, Some("Dhanbad Urban Agglomeration")),
        city(34, "Amritsar", "Punjab", North, 1_132_383, 601_517, 139.0, 85.27, 1577, Some(0.1136), None),
        city(35, "Navi Mumbai", "Maharashtra", West, 1_119_477, 604_113, 163.0, 91.57, 1971, Some(0.6089), Some("Mumbai Metropolitan Region")),
        city(36, "Prayagraj", "Uttar Pradesh", North, 1_112_544, 591_979, 82.0, 86.50, 1575, Some(0.1092), None),
        city(37, "Ranchi", "Jharkhand", East, 1_073_427, 557_186, 175.1, 87.68, 1927, Some(0.3217), Some("Ranchi Urban Agglomeration")),
        city(38, "Howrah", "West Bengal", East, 1_072_161, 562_844, 51.7, 84.36, 1713, Some(0.0384), Some("Kolkata Metropolitan Area")),
        city(39, "Gwalior", "Madhya Pradesh", Central, 1_069_276, 567_220, 289.0, 84.14, 1232, Some(0.2260), None),
        city(40, "Jabalpur", "Madhya Pradesh", Central, 1_055_525, 548_230, 263.0, 89.22, 1781, Some(0.1382), None),
        city(41, "Coimbatore", "Tamil Nadu", South, 1_050_721, 524_952, 246.8, 91.30, 1866, Some(0.0807), Some("Coimbatore Urban Agglomeration")),
        city(42, "Vijayawada", "Andhra Pradesh", South, 1_034_358, 521_924, 61.9, 82.59, 1888, Some(0.0982), None),
        city(43, "Jodhpur", "Rajasthan", North, 1_033_756, 546_253, 78.6, 80.56, 1459, Some(0.2850), None),
        city(44, "Madurai", "Tamil Nadu", South, 1_017_865, 509_493, 147.9, 90.94, 1840, Some(0.0642), Some("Madurai Urban Agglomeration")),
        city(45, "Raipur", "Chhattisgarh", Central, 1_010_087, 520_061, 226.0, 86.90, 1402, Some(0.4120), None),
        city(46, "Kota", "Rajasthan", North, 1_001_694, 528_032, 527.0, 81.52, 1631, Some(0.3180), None),
        city(47, "Chandigarh", "Chandigarh", North, 960_787, 529_118, 114.6, 86.43, 1952, Some(0.1734), Some("Chandigarh Tricity")),
        city(48, "Guwahati", "Assam", NorthEast, 957_352, 493_460, 216.0, 91.47, 1874, Some(0.1837), Some("Guwahati Metropolitan Area")),
        city(49, "Solapur", "Maharashtra", West, 951_558, 484_468, 178.6, 81.94, 1852, None, None),
        city(50, "Hubballi-Dharwad", "Karnataka", South, 943_788, 475_203, 202.3, 87.16, 1962, Some(0.2150), None),
    ]
}
