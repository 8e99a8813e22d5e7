use serde::{Deserialize, Deserializer};

use super::ZlmClientError;

/// Deserializes a value, treating `null` as its [`Default`].
pub(crate) fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// Uniform envelope of all [ZLMediaKit HTTP API][1] responses.
///
///
/// Absent or `null` `code` and `msg` are read as `0` and an empty string.
///
/// [1]: https://docs.zlmediakit.com/guide/media_server/restful_api.html
#[derive(Debug, Deserialize)]
pub(crate) struct ZlmResp<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) msg: String,
    pub(crate) data: Option<T>,
}

impl<T> ZlmResp<T> {
    /// Unwraps the payload of this [`ZlmResp`], if its `code` signals success.
    ///
    /// # Errors
    ///
    /// With [`ZlmClientError::ApiError`] if `code` is non-zero.
    pub(crate) fn into_data(self) -> Result<Option<T>, ZlmClientError> {
        if self.code != 0 {
            return Err(ZlmClientError::ApiError {
                code: self.code,
                msg: self.msg,
            });
        }
        Ok(self.data)
    }
}
