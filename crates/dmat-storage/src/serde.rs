use num_traits::Zero;
use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::{Array2D, DenseArray2D, FixedArray2D};

/// Serialized form shared by all the storage layouts.
#[derive(Deserialize)]
struct ArrayData<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

fn serialize_array<T, A, S>(array: &A, name: &'static str, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Copy + serde::Serialize,
    A: Array2D<T>,
    S: serde::Serializer,
{
    let mut state = serializer.serialize_struct(name, 3)?;
    state.serialize_field("rows", &array.num_rows())?;
    state.serialize_field("cols", &array.num_cols())?;
    state.serialize_field("data", &array.to_vec())?;
    state.end()
}

impl<T> serde::Serialize for DenseArray2D<T>
where
    T: Copy + Zero + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_array(self, "DenseArray2D", serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for DenseArray2D<T>
where
    T: Copy + Zero + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ArrayData { rows, cols, data } = ArrayData::deserialize(deserializer)?;
        DenseArray2D::from_shape_vec(rows, cols, data).map_err(serde::de::Error::custom)
    }
}

impl<T, const R: usize, const C: usize> serde::Serialize for FixedArray2D<T, R, C>
where
    T: Copy + Zero + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_array(self, "FixedArray2D", serializer)
    }
}

impl<'de, T, const R: usize, const C: usize> serde::Deserialize<'de> for FixedArray2D<T, R, C>
where
    T: Copy + Zero + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ArrayData { rows, cols, data } = ArrayData::deserialize(deserializer)?;
        if data.len() != rows * cols {
            return Err(serde::de::Error::custom("Invalid data length"));
        }

        let mut array = FixedArray2D::with_shape(rows, cols).map_err(serde::de::Error::custom)?;
        array.initialize(&data).map_err(serde::de::Error::custom)?;
        Ok(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_dense_keeps_logical_order() -> Result<(), Box<dyn std::error::Error>> {
        let mut a = DenseArray2D::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
        a.swap_rows(0, 1);

        let serialized = serde_json::to_string(&a)?;
        assert_eq!(serialized, r#"{"rows":2,"cols":2,"data":[3.0,4.0,1.0,2.0]}"#);

        let b: DenseArray2D<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(b.to_vec(), a.to_vec());
        assert!(!b.rows_swapped());
        Ok(())
    }

    #[test]
    fn test_serde_fixed_shape_checked() -> Result<(), Box<dyn std::error::Error>> {
        let a = FixedArray2D::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
        let serialized = serde_json::to_string(&a)?;
        let b: FixedArray2D<i32, 2, 2> = serde_json::from_str(&serialized)?;
        assert_eq!(a, b);

        let wrong: Result<FixedArray2D<i32, 1, 4>, _> = serde_json::from_str(&serialized);
        assert!(wrong.is_err());
        Ok(())
    }
}
