mod haversine;
mod linspace;

pub(crate) use {
    haversine::haversine_km,
    linspace::{lerp, linspace},
};
