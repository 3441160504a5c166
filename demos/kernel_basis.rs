use faer::Mat;
use nullspan::config::KernelOptions;
use nullspan::core::traits::{InnerProduct, MatVec};
use nullspan::kernel::nullspace;
use nullspan::matrix::DenseMatrix;
use nullspan::utils::format::{DEFAULT_DIGITS, format_labeled};

fn main() {
    // Dimensional matrix for drag on a sphere: rows are the base dimensions
    // M, L, T; columns are the physical variables F, v, d, rho, mu.
    let a = Mat::from_rows(&[
        vec![1.0, 0.0, 0.0, 1.0, 1.0],
        vec![1.0, 1.0, 1.0, -3.0, -1.0],
        vec![-2.0, -1.0, 0.0, 0.0, -1.0],
    ]);
    let vars = ["F", "v", "d", "rho", "mu"];
    let dims = ["M", "L", "T"];

    println!("dimensional matrix:");
    print!("{}", format_labeled(&a, &vars, &dims, DEFAULT_DIGITS));

    let kern = nullspace(&a, &vars, &KernelOptions::default()).unwrap();
    println!(
        "rank = {}, nullity = {} (dimensionless groups)",
        kern.rank,
        kern.nullity()
    );

    // each basis column is an exponent vector with A * x = 0
    let ip = ();
    let mut y = vec![0.0; a.nrows()];
    for k in 0..kern.basis.ncols() {
        let x: Vec<f64> = (0..a.ncols()).map(|i| kern.basis[(i, k)]).collect();
        a.matvec(&x, &mut y);
        println!("pi_{k} residual |A x| = {:.3e}", ip.norm(&y));
    }

    let pi_names: Vec<String> = (0..kern.nullity()).map(|k| format!("pi_{k}")).collect();
    println!("\nnullspace basis (exponents per variable):");
    print!("{}", format_labeled(&kern.basis, &pi_names, &vars, 2));
}
