//! Built-in sample catalogs used by the `sample` command and tests.

pub const SAMPLE_PMG: &str = "Gym
Yoga Studio
Swimming Pool
24/7 Security
Concierge Desk
Rooftop Garden
Pet Spa
Study Lounge
Theatre Room
Housekeeping Services
High-Speed WiFi
Laundry Service
Parking Garage
Bike Storage
Package Room
Outdoor Grill Zone";

pub const SAMPLE_AMBER: &str = "Gym
Swimming Pool
Security 24x7
Concierge
Roof Top Garden
Pet Spa
Study Lounge
Mini Theatre
House Keeping
High Speed Wifi
Laundry Services
Parking
Bike Storage
Package Room
Package room
Private Cinema";
