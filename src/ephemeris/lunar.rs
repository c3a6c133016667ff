//! Apparent geocentric lunar position from a truncated ELP2000-82
//! series (Meeus ch. 47 term tables).

use qtty::{Degree, Degrees, Kilometers};

use super::{nutation, EclipticPosition};
use crate::models::JulianDate;

/// Mean Earth-Moon distance baseline for the radius series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Periodic term: multiples of (D, M, M', F) and a coefficient.
///
/// Longitude/latitude coefficients are in 1e-6 degrees, distance
/// coefficients in 1e-3 km, as tabulated by Meeus.
struct Term(i8, i8, i8, i8, f64);

// Longitude terms, table 47.a (largest 24)
const LONGITUDE_TERMS: [Term; 24] = [
    Term(0, 0, 1, 0, 6_288_774.0),
    Term(2, 0, -1, 0, 1_274_027.0),
    Term(2, 0, 0, 0, 658_314.0),
    Term(0, 0, 2, 0, 213_618.0),
    Term(0, 1, 0, 0, -185_116.0),
    Term(0, 0, 0, 2, -114_332.0),
    Term(2, 0, -2, 0, 58_793.0),
    Term(2, -1, -1, 0, 57_066.0),
    Term(2, 0, 1, 0, 53_322.0),
    Term(2, -1, 0, 0, 45_758.0),
    Term(0, 1, -1, 0, -40_923.0),
    Term(1, 0, 0, 0, -34_720.0),
    Term(0, 1, 1, 0, -30_383.0),
    Term(2, 0, 0, -2, 15_327.0),
    Term(0, 0, 1, 2, -12_528.0),
    Term(0, 0, 1, -2, 10_980.0),
    Term(4, 0, -1, 0, 10_675.0),
    Term(0, 0, 3, 0, 10_034.0),
    Term(4, 0, -2, 0, 8_548.0),
    Term(2, 1, -1, 0, -7_888.0),
    Term(2, 1, 0, 0, -6_766.0),
    Term(1, 0, -1, 0, -5_163.0),
    Term(1, 1, 0, 0, 4_987.0),
    Term(2, -1, 1, 0, 4_036.0),
];

// Latitude terms, table 47.b (largest 10)
const LATITUDE_TERMS: [Term; 10] = [
    Term(0, 0, 0, 1, 5_128_122.0),
    Term(0, 0, 1, 1, 280_602.0),
    Term(0, 0, 1, -1, 277_693.0),
    Term(2, 0, 0, -1, 173_237.0),
    Term(2, 0, -1, 1, 55_413.0),
    Term(2, 0, -1, -1, 46_271.0),
    Term(2, 0, 0, 1, 32_573.0),
    Term(0, 0, 2, 1, 17_198.0),
    Term(2, 0, 1, -1, 9_266.0),
    Term(0, 0, 2, -1, 8_822.0),
];

// Distance terms, table 47.a (same argument rows as the longitude series)
const DISTANCE_TERMS: [Term; 23] = [
    Term(0, 0, 1, 0, -20_905_355.0),
    Term(2, 0, -1, 0, -3_699_111.0),
    Term(2, 0, 0, 0, -2_955_968.0),
    Term(0, 0, 2, 0, -569_925.0),
    Term(0, 1, 0, 0, 48_888.0),
    Term(0, 0, 0, 2, -3_149.0),
    Term(2, 0, -2, 0, 246_158.0),
    Term(2, -1, -1, 0, -152_138.0),
    Term(2, 0, 1, 0, -170_733.0),
    Term(2, -1, 0, 0, -204_586.0),
    Term(0, 1, -1, 0, -129_620.0),
    Term(1, 0, 0, 0, 108_743.0),
    Term(0, 1, 1, 0, 104_755.0),
    Term(2, 0, 0, -2, 10_321.0),
    Term(0, 0, 1, -2, 79_661.0),
    Term(4, 0, -1, 0, -34_782.0),
    Term(0, 0, 3, 0, -23_210.0),
    Term(4, 0, -2, 0, -21_636.0),
    Term(2, 1, -1, 0, 24_208.0),
    Term(2, 1, 0, 0, 30_824.0),
    Term(1, 0, -1, 0, -8_379.0),
    Term(1, 1, 0, 0, -16_675.0),
    Term(2, -1, 1, 0, -12_831.0),
];

/// Fundamental arguments of the lunar theory at a TT instant, radians.
struct Arguments {
    /// Mean longitude L'
    lp: f64,
    /// Mean elongation D
    d: f64,
    /// Solar mean anomaly M
    m: f64,
    /// Lunar mean anomaly M'
    mp: f64,
    /// Argument of latitude F
    f: f64,
    /// Eccentricity damping factor E
    e: f64,
}

fn fundamental_arguments(t: f64) -> Arguments {
    let deg = |v: f64| Degrees::new(v).wrap_pos().to::<qtty::Radian>().value();
    Arguments {
        lp: deg(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t
            + t.powi(3) / 538_841.0),
        d: deg(297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t
            + t.powi(3) / 545_868.0),
        m: deg(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t),
        mp: deg(134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t
            + t.powi(3) / 69_699.0),
        f: deg(93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t
            - t.powi(3) / 3_526_000.0),
        e: 1.0 - 0.002_516 * t - 0.000_007_4 * t * t,
    }
}

fn sum_terms(terms: &[Term], args: &Arguments, use_sin: bool) -> f64 {
    terms
        .iter()
        .map(|term| {
            let Term(d, m, mp, f, coeff) = term;
            let arg = *d as f64 * args.d + *m as f64 * args.m + *mp as f64 * args.mp
                + *f as f64 * args.f;
            // Terms depending on the solar anomaly shrink with eccentricity
            let damping = match m.abs() {
                1 => args.e,
                2 => args.e * args.e,
                _ => 1.0,
            };
            *coeff * damping * if use_sin { arg.sin() } else { arg.cos() }
        })
        .sum()
}

/// Apparent geocentric ecliptic position of the Moon at the given TT instant.
///
/// Truncated ELP2000-82 series plus the planetary additive terms, corrected
/// for nutation in longitude.
pub fn apparent_position(jd_tt: JulianDate) -> EclipticPosition {
    let t = jd_tt.julian_centuries();
    let args = fundamental_arguments(t);

    let mut sum_l = sum_terms(&LONGITUDE_TERMS, &args, true);
    let mut sum_b = sum_terms(&LATITUDE_TERMS, &args, true);
    let sum_r = sum_terms(&DISTANCE_TERMS, &args, false);

    // Additive terms: Venus (A1), Jupiter (A2), and flattening of the Earth
    let a1 = Degrees::new(119.75 + 131.849 * t).to::<qtty::Radian>().value();
    let a2 = Degrees::new(53.09 + 479_264.290 * t).to::<qtty::Radian>().value();
    let a3 = Degrees::new(313.45 + 481_266.484 * t).to::<qtty::Radian>().value();
    sum_l += 3_958.0 * a1.sin() + 1_962.0 * (args.lp - args.f).sin() + 318.0 * a2.sin();
    sum_b += -2_235.0 * args.lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - args.f).sin()
        + 175.0 * (a1 + args.f).sin()
        + 127.0 * (args.lp - args.mp).sin()
        - 115.0 * (args.lp + args.mp).sin();

    let dpsi = nutation(jd_tt).in_longitude.to::<Degree>();
    let lp_deg = args.lp.to_degrees();
    let longitude = (Degrees::new(lp_deg + sum_l / 1e6) + dpsi).wrap_pos();
    let latitude = Degrees::new(sum_b / 1e6);
    let distance = Kilometers::new(MEAN_DISTANCE_KM + sum_r / 1e3);

    EclipticPosition {
        longitude,
        latitude,
        distance,
    }
}
