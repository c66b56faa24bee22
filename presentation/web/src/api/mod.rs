pub mod error;
pub mod health {
    pub mod routes;
}
pub mod page {
    pub mod render;
    pub mod routes;
}
pub mod recommendation {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;

#[cfg(test)]
pub mod test_support;
