pub mod client;
pub mod movie_recommender;
