// Rent prediction walkthrough: fit monthly rents for 18 Dublin rental
// listings with the normal equation, then predict three held-out
// properties and print each prediction against the advertised rent.
//
// Feature columns, one row per property:
//   bedrooms, bathrooms, north-of-the-Liffey flag (10/0), apartment flag
//   (10/0), house flag (10/0), floor area (sq m), floor area squared, and
//   distance from O'Connell Bridge (km). The squared-area column and the
//   10/0 indicator encoding are caller-side feature engineering; the
//   regression core sees them as ordinary columns.

use normalis::regress;

#[rustfmt::skip]
const TRAINING_DATA: [[f64; 8]; 18] = [
    [2.0, 2.0,  0.0, 10.0,  0.0,  91.00,  8281.00, 13.05],
    [2.0, 3.0, 10.0, 10.0,  0.0, 122.00, 14884.00,  2.28],
    [2.0, 2.0,  0.0, 10.0,  0.0, 102.19, 10442.80,  8.79],
    [3.0, 2.0,  0.0, 10.0,  0.0, 127.00, 16129.00,  3.33],
    [2.0, 2.0,  0.0, 10.0,  0.0,  70.00,  4900.00,  1.10],
    [1.0, 1.0, 10.0, 10.0,  0.0,  44.00,  1936.00,  1.03],
    [2.0, 1.0, 10.0, 10.0,  0.0,  52.00,  2704.00,  1.21],
    [4.0, 2.0,  0.0, 10.0,  0.0, 127.00, 16129.00,  3.28],
    [1.0, 1.0, 10.0, 10.0,  0.0,  48.00,  2304.00,  2.96],
    [2.0, 2.0,  0.0, 10.0,  0.0,  80.00,  6400.00, 13.41],
    [2.0, 2.0,  0.0, 10.0,  0.0,  75.00,  5625.00,  1.88],
    [2.0, 2.0,  0.0, 10.0,  0.0,  75.00,  5625.00,  1.65],
    [1.0, 1.0,  0.0, 10.0,  0.0,  50.00,  2500.00,  1.44],
    [4.0, 3.0, 10.0,  0.0, 10.0, 139.00, 19321.00,  5.33],
    [2.0, 1.0, 10.0,  0.0, 10.0,  73.00,  5329.00,  1.87],
    [2.0, 2.0,  0.0, 10.0,  0.0,  98.00,  9604.00,  2.51],
    [2.0, 2.0,  0.0, 10.0,  0.0,  72.00,  5184.00,  5.68],
    [2.0, 1.0,  0.0,  0.0, 10.0,  63.00,  3969.00,  1.92],
];

const TRAINING_RENTS: [f64; 18] = [
    2250.0, 2000.0, 1924.0, 3300.0, 2950.0, 1660.0, 2100.0, 3500.0, 1600.0, 1600.0, 3950.0,
    4250.0, 3450.0, 2995.0, 2000.0, 3700.0, 1900.0, 2500.0,
];

// Held-out listings with their advertised rents, used only for comparison.
#[rustfmt::skip]
const TEST_DATA: [[f64; 8]; 3] = [
    [2.0, 2.0,  0.0, 10.0, 0.0, 157.93, 24941.8849, 2.33],
    [2.0, 1.0,  0.0, 10.0, 0.0,  97.00,  9409.0000, 1.44],
    [1.0, 1.0, 10.0, 10.0, 0.0,  48.00,  2304.0000, 1.00],
];

const TEST_RENTS: [f64; 3] = [3500.0, 3000.0, 1850.0];

fn main() {
    let rows: Vec<&[f64]> = TRAINING_DATA.iter().map(|r| r.as_slice()).collect();
    let theta = regress::fit(&rows, &TRAINING_RENTS).unwrap();

    let mut avg = 0.0;
    for (i, (features, &actual)) in TEST_DATA.iter().zip(TEST_RENTS.iter()).enumerate() {
        let predicted = regress::predict(features, &theta).unwrap();
        let diff = predicted - actual;
        avg += diff;
        println!(
            "Prediction for property {} rent is: {:.0}. Actual rent: {:.0}  (error: {:.0} Euro)",
            i + 1,
            predicted,
            actual,
            diff
        );
    }
    println!();
    println!("Average error: {:.0} Euro", avg / TEST_RENTS.len() as f64);
}
