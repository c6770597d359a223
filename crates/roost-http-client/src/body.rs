use bytes::Bytes;
use http_body::Frame;
use std::{
    borrow::Cow,
    convert::Infallible,
    fmt::{self, Debug},
    pin::Pin,
    task::{self, Poll},
};

/// Body on a budget
///
/// Either empty or a single already-buffered chunk. Every request this crate
/// sends is small and fully in memory, so there is no streaming variant and
/// the type stays `Unpin`.
pub enum Body {
    /// Empty body
    Empty,

    /// Body consisting of a single chunk
    Full {
        /// The chunk, taken the first time the body is polled
        data: Option<Bytes>,
    },
}

impl Body {
    /// Empty body
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Single byte chunk body
    #[inline]
    pub fn data<D>(data: D) -> Self
    where
        D: Into<Bytes>,
    {
        Self::Full {
            data: Some(data.into()),
        }
    }
}

impl Default for Body {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl Debug for Body {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(std::any::type_name::<Self>())
            .finish_non_exhaustive()
    }
}

impl From<Bytes> for Body {
    #[inline]
    fn from(value: Bytes) -> Self {
        Self::data(value)
    }
}

impl From<Cow<'_, str>> for Body {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::data(value.into_owned())
    }
}

impl From<&'static str> for Body {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::data(value)
    }
}

impl From<String> for Body {
    #[inline]
    fn from(value: String) -> Self {
        Self::data(value)
    }
}

impl From<Vec<u8>> for Body {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self::data(value)
    }
}

impl http_body::Body for Body {
    type Data = Bytes;
    type Error = Infallible;

    #[inline]
    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut task::Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            Self::Empty => Poll::Ready(None),
            Self::Full { data } => Poll::Ready(data.take().map(|data| Ok(Frame::data(data)))),
        }
    }

    #[inline]
    fn is_end_stream(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Full { data } => data.is_none(),
        }
    }

    #[inline]
    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            Self::Empty => http_body::SizeHint::with_exact(0),
            Self::Full { data } => http_body::SizeHint::with_exact(
                data.as_ref().map_or(0, |data| data.len() as u64),
            ),
        }
    }
}
