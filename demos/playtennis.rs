//! PlayTennis Classification
//! =========================
//! Classic decision-tree example: decide whether to play tennis from four
//! categorical weather features (Outlook, Temperature, Humidity, Wind).
//! Induces an ID3 tree, renders it, and checks the training accuracy.
//!
//! ```bash
//! cargo run --release --example playtennis
//! ```

use canopy::{Matrix, Tree};
use std::error::Error;

/// Accuracy = correct / total
fn accuracy(y_true: &[u16], y_pred: &[u16]) -> f64 {
    let correct = y_true.iter().zip(y_pred).filter(|&(t, p)| t == p).count();
    correct as f64 / y_true.len() as f64
}

fn main() -> Result<(), Box<dyn Error>> {
    // ------------------------------------------------------------------
    // 1. The 14-sample PlayTennis dataset, column-major.
    //    Outlook: 0 Sunny, 1 Overcast, 2 Rain
    //    Temperature: 0 Cool, 1 Mild, 2 Hot
    //    Humidity: 0 Normal, 1 High
    //    Wind: 0 Weak, 1 Strong
    //    Target: 0 Don't Play, 1 Play
    // ------------------------------------------------------------------
    let data: Vec<u16> = vec![
        0, 0, 1, 2, 2, 2, 1, 0, 0, 2, 0, 1, 1, 2, // Outlook
        2, 2, 2, 1, 0, 0, 0, 1, 0, 1, 1, 1, 2, 1, // Temperature
        1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, // Humidity
        0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, // Wind
    ];
    let y: Vec<u16> = vec![0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0];
    let nclasses: Vec<u16> = vec![3, 3, 2, 2];

    let matrix = Matrix::new(&data, 14, 4);

    // ------------------------------------------------------------------
    // 2. Induce the tree.
    // ------------------------------------------------------------------
    let tree = Tree::fit(&matrix, &y, &nclasses)?;
    println!("{}", tree);
    println!("depth: {}, leaves: {}", tree.depth, tree.n_leaves);

    // ------------------------------------------------------------------
    // 3. Evaluate on the training rows.
    // ------------------------------------------------------------------
    let predictions = tree.predict(&matrix)?;
    println!("Training accuracy: {:.2}%", accuracy(&y, &predictions) * 100.0);

    let importance = tree.calculate_importance();
    println!("Splits per feature: {:?}", importance);

    Ok(())
}
