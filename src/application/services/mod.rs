pub mod consumption_service;
