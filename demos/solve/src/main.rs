use argh::FromArgs;
use dmat::{
    matrix::{DenseMatrix, MatrixError},
    vector::Vector,
};

/// Inverts a square matrix and solves a linear system with it
#[derive(Debug, FromArgs)]
struct Args {
    /// matrix rows separated by ';' and columns by ',', e.g. "3,2;1,4"
    #[argh(option, short = 'm', from_str_fn(parse_matrix))]
    matrix: DenseMatrix<f64>,

    /// right hand side separated by ',', e.g. "7,9"
    #[argh(option, short = 'b', from_str_fn(parse_vector))]
    rhs: Option<Vector<f64>>,

    /// tolerance under which a pivot is treated as zero
    #[argh(option, short = 'z')]
    zero_test: Option<f64>,
}

fn parse_vector(value: &str) -> Result<Vector<f64>, String> {
    value
        .split(',')
        .map(|x| x.trim().parse::<f64>().map_err(|e| format!("{x}: {e}")))
        .collect()
}

fn parse_matrix(value: &str) -> Result<DenseMatrix<f64>, String> {
    let rows = value
        .split(';')
        .map(parse_vector)
        .collect::<Result<Vec<_>, _>>()?;

    let cols = rows.first().map_or(0, |r| r.dim());
    if rows.iter().any(|r| r.dim() != cols) {
        return Err("every row must have the same number of columns".to_string());
    }

    let data = rows.into_iter().flat_map(Vector::into_vec).collect::<Vec<_>>();
    DenseMatrix::from_shape_vec(data.len() / cols.max(1), cols, data).map_err(|e| e.to_string())
}

fn print_matrix(name: &str, m: &DenseMatrix<f64>) {
    println!("{name} =");
    for r in 0..m.num_rows() {
        let row = m[r].iter().map(|x| format!("{x:>12.6}")).collect::<String>();
        println!("  [{row} ]");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut a = args.matrix;
    if let Some(zero_test) = args.zero_test {
        a.set_zero_test(zero_test);
    }
    log::debug!("matrix shape {:?}, zero test {:e}", a.shape(), a.zero_test());

    print_matrix("A", &a);

    match a.inverse() {
        Ok(ai) => {
            print_matrix("inv(A)", &ai);
            let residual = (&(&a * &ai)? - &DenseMatrix::eye(a.num_rows())?)?;
            let max_err = residual
                .to_vec()
                .iter()
                .fold(0.0f64, |acc, x| acc.max(x.abs()));
            log::info!("max |A * inv(A) - I| = {max_err:e}");
        }
        Err(MatrixError::Singular { column }) => {
            log::warn!("A is singular, no usable pivot in column {column}");
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(b) = args.rhs {
        let x = a.solve(&b)?;
        println!("x = {:?}", x.to_vec());

        let mut ax = Vector::new(0);
        a.mul_vector(&x, &mut ax)?;
        log::info!("A * x = {:?}", ax.to_vec());
    }

    Ok(())
}
