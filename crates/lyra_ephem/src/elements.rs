//! Approximate Keplerian elements for the major planets.
//!
//! Element values and per-century rates are the JPL approximate-position
//! table (Standish, "Approximate Positions of the Planets"), valid
//! 1800 AD – 2050 AD, J2000 ecliptic frame. Each element is evaluated as
//! `value + rate × T` with T in Julian centuries from J2000.0.

use crate::Body;

/// One planet's osculating elements at J2000 plus linear rates.
#[derive(Debug, Clone, Copy)]
pub struct KeplerianElements {
    /// Semi-major axis, AU.
    pub a_au: f64,
    pub a_rate: f64,
    /// Eccentricity.
    pub e: f64,
    pub e_rate: f64,
    /// Inclination, degrees.
    pub i_deg: f64,
    pub i_rate: f64,
    /// Mean longitude, degrees.
    pub l_deg: f64,
    pub l_rate: f64,
    /// Longitude of perihelion, degrees.
    pub peri_deg: f64,
    pub peri_rate: f64,
    /// Longitude of the ascending node, degrees.
    pub node_deg: f64,
    pub node_rate: f64,
}

impl KeplerianElements {
    /// Elements propagated to T Julian centuries from J2000.
    pub fn at(&self, t: f64) -> PropagatedElements {
        PropagatedElements {
            a_au: self.a_au + self.a_rate * t,
            e: self.e + self.e_rate * t,
            i_deg: self.i_deg + self.i_rate * t,
            l_deg: self.l_deg + self.l_rate * t,
            peri_deg: self.peri_deg + self.peri_rate * t,
            node_deg: self.node_deg + self.node_rate * t,
        }
    }
}

/// Elements evaluated at a specific epoch.
#[derive(Debug, Clone, Copy)]
pub struct PropagatedElements {
    pub a_au: f64,
    pub e: f64,
    pub i_deg: f64,
    pub l_deg: f64,
    pub peri_deg: f64,
    pub node_deg: f64,
}

/// The full heliocentric element set.
#[derive(Debug, Clone, Copy)]
pub struct HelioElements {
    pub mercury: KeplerianElements,
    pub venus: KeplerianElements,
    pub earth_moon_bary: KeplerianElements,
    pub mars: KeplerianElements,
    pub jupiter: KeplerianElements,
    pub saturn: KeplerianElements,
    pub uranus: KeplerianElements,
    pub neptune: KeplerianElements,
    pub pluto: KeplerianElements,
}

impl HelioElements {
    /// Elements for a planet. The Sun and Moon are not heliocentric-element
    /// bodies; reaching this with either is a logic defect upstream.
    pub fn planet(&self, body: Body) -> &KeplerianElements {
        match body {
            Body::Mercury => &self.mercury,
            Body::Venus => &self.venus,
            Body::Mars => &self.mars,
            Body::Jupiter => &self.jupiter,
            Body::Saturn => &self.saturn,
            Body::Uranus => &self.uranus,
            Body::Neptune => &self.neptune,
            Body::Pluto => &self.pluto,
            Body::Sun | Body::Moon => {
                unreachable!("Sun and Moon positions do not use heliocentric elements")
            }
        }
    }
}

/// JPL approximate elements, 1800 AD – 2050 AD.
pub const HELIO_ELEMENTS: HelioElements = HelioElements {
    mercury: KeplerianElements {
        a_au: 0.387_099_27,
        a_rate: 0.000_000_37,
        e: 0.205_635_93,
        e_rate: 0.000_019_06,
        i_deg: 7.004_979_02,
        i_rate: -0.005_947_49,
        l_deg: 252.250_323_50,
        l_rate: 149_472.674_111_75,
        peri_deg: 77.457_796_28,
        peri_rate: 0.160_476_89,
        node_deg: 48.330_765_93,
        node_rate: -0.125_340_81,
    },
    venus: KeplerianElements {
        a_au: 0.723_335_66,
        a_rate: 0.000_003_90,
        e: 0.006_776_72,
        e_rate: -0.000_041_07,
        i_deg: 3.394_676_05,
        i_rate: -0.000_788_90,
        l_deg: 181.979_099_50,
        l_rate: 58_517.815_387_29,
        peri_deg: 131.602_467_18,
        peri_rate: 0.002_683_29,
        node_deg: 76.679_842_55,
        node_rate: -0.277_694_18,
    },
    earth_moon_bary: KeplerianElements {
        a_au: 1.000_002_61,
        a_rate: 0.000_005_62,
        e: 0.016_711_23,
        e_rate: -0.000_043_92,
        i_deg: -0.000_015_31,
        i_rate: -0.012_946_68,
        l_deg: 100.464_571_66,
        l_rate: 35_999.372_449_81,
        peri_deg: 102.937_681_93,
        peri_rate: 0.323_273_64,
        node_deg: 0.0,
        node_rate: 0.0,
    },
    mars: KeplerianElements {
        a_au: 1.523_710_34,
        a_rate: 0.000_018_47,
        e: 0.093_394_10,
        e_rate: 0.000_078_82,
        i_deg: 1.849_691_42,
        i_rate: -0.008_131_31,
        l_deg: -4.553_432_05,
        l_rate: 19_140.302_684_99,
        peri_deg: -23.943_629_59,
        peri_rate: 0.444_410_88,
        node_deg: 49.559_538_91,
        node_rate: -0.292_573_43,
    },
    jupiter: KeplerianElements {
        a_au: 5.202_887_00,
        a_rate: -0.000_116_07,
        e: 0.048_386_24,
        e_rate: -0.000_132_53,
        i_deg: 1.304_396_95,
        i_rate: -0.001_837_14,
        l_deg: 34.396_440_51,
        l_rate: 3_034.746_127_75,
        peri_deg: 14.728_479_83,
        peri_rate: 0.212_526_68,
        node_deg: 100.473_909_09,
        node_rate: 0.204_691_06,
    },
    saturn: KeplerianElements {
        a_au: 9.536_675_94,
        a_rate: -0.001_250_60,
        e: 0.053_861_79,
        e_rate: -0.000_509_91,
        i_deg: 2.485_991_87,
        i_rate: 0.001_936_09,
        l_deg: 49.954_244_23,
        l_rate: 1_222.493_622_01,
        peri_deg: 92.598_878_31,
        peri_rate: -0.418_972_16,
        node_deg: 113.662_424_48,
        node_rate: -0.288_677_94,
    },
    uranus: KeplerianElements {
        a_au: 19.189_164_64,
        a_rate: -0.001_961_76,
        e: 0.047_257_44,
        e_rate: -0.000_043_97,
        i_deg: 0.772_637_83,
        i_rate: -0.002_429_39,
        l_deg: 313.238_104_51,
        l_rate: 428.482_027_85,
        peri_deg: 170.954_276_30,
        peri_rate: 0.408_052_81,
        node_deg: 74.016_925_03,
        node_rate: 0.042_405_89,
    },
    neptune: KeplerianElements {
        a_au: 30.069_922_76,
        a_rate: 0.000_262_91,
        e: 0.008_590_48,
        e_rate: 0.000_051_05,
        i_deg: 1.770_043_47,
        i_rate: 0.000_353_72,
        l_deg: -55.120_029_69,
        l_rate: 218.459_453_25,
        peri_deg: 44.964_762_27,
        peri_rate: -0.322_414_64,
        node_deg: 131.784_225_74,
        node_rate: -0.005_086_64,
    },
    pluto: KeplerianElements {
        a_au: 39.482_116_75,
        a_rate: -0.000_315_96,
        e: 0.248_827_30,
        e_rate: 0.000_051_70,
        i_deg: 17.140_012_06,
        i_rate: 0.000_048_18,
        l_deg: 238.929_038_33,
        l_rate: 145.207_805_15,
        peri_deg: 224.068_916_29,
        peri_rate: -0.040_629_42,
        node_deg: 110.303_936_84,
        node_rate: -0.011_834_82,
    },
};
