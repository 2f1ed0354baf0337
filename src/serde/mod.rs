use crate::{c64, Mat};
use ::serde::de::Error;
use ::serde::ser::{SerializeSeq, SerializeStruct};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Mat {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct MatSequenceSerializer<'a>(&'a Mat);

        impl Serialize for MatSequenceSerializer<'_> {
            fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut seq = s.serialize_seq(Some(self.0.nrows() * self.0.ncols()))?;
                for i in 0..self.0.nrows() {
                    for j in 0..self.0.ncols() {
                        seq.serialize_element(&self.0[(i, j)])?;
                    }
                }
                seq.end()
            }
        }

        let mut structure = s.serialize_struct("Mat", 3)?;
        structure.serialize_field("nrows", &self.nrows())?;
        structure.serialize_field("ncols", &self.ncols())?;
        structure.serialize_field("data", &MatSequenceSerializer(self))?;
        structure.end()
    }
}

impl<'de> Deserialize<'de> for Mat {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Mat")]
        struct RowMajor {
            nrows: usize,
            ncols: usize,
            data: Vec<c64>,
        }

        let RowMajor { nrows, ncols, data } = RowMajor::deserialize(d)?;
        Mat::from_row_major_slice(nrows, ncols, &data).map_err(D::Error::custom)
    }
}
