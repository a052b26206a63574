use dmat_storage::Array2D;
use num_traits::Float;
use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::matrix::{default_zero_test, Matrix};

#[derive(Deserialize)]
struct MatrixData<T> {
    rows: usize,
    cols: usize,
    zero_test: Option<T>,
    data: Vec<T>,
}

impl<T, A> serde::Serialize for Matrix<T, A>
where
    T: Float + serde::Serialize,
    A: Array2D<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 4)?;
        state.serialize_field("rows", &self.num_rows())?;
        state.serialize_field("cols", &self.num_cols())?;
        state.serialize_field("zero_test", &self.zero_test())?;
        state.serialize_field("data", &self.to_vec())?;
        state.end()
    }
}

impl<'de, T, A> serde::Deserialize<'de> for Matrix<T, A>
where
    T: Float + serde::Deserialize<'de>,
    A: Array2D<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let MatrixData {
            rows,
            cols,
            zero_test,
            data,
        } = MatrixData::deserialize(deserializer)?;

        let m = Matrix::from_shape_vec(rows, cols, data).map_err(serde::de::Error::custom)?;
        Ok(m.with_zero_test(zero_test.unwrap_or_else(default_zero_test)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{DenseMatrix, FixedMatrix};

    #[test]
    fn test_serde_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let mut a = DenseMatrix::from_shape_slice(2, 2, &[1.0, 2.0, 3.0, 4.0])?.with_zero_test(0.5);
        a.swap_rows(0, 1);

        let serialized = serde_json::to_string(&a)?;
        assert_eq!(
            serialized,
            r#"{"rows":2,"cols":2,"zero_test":0.5,"data":[3.0,4.0,1.0,2.0]}"#
        );

        let b: DenseMatrix<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(b.zero_test(), 0.5);
        assert_eq!(b.to_vec(), a.to_vec());
        Ok(())
    }

    #[test]
    fn test_serde_matrix_default_zero_test() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"rows":1,"cols":2,"data":[1.0,2.0]}"#;
        let m: FixedMatrix<f32, 1, 2> = serde_json::from_str(json)?;
        assert_eq!(m.zero_test(), crate::default_zero_test::<f32>());

        let wrong: Result<FixedMatrix<f32, 2, 1>, _> = serde_json::from_str(json);
        assert!(wrong.is_err());
        let short: Result<DenseMatrix<f32>, _> = serde_json::from_str(r#"{"rows":2,"cols":2,"data":[1.0]}"#);
        assert!(short.is_err());
        Ok(())
    }
}
