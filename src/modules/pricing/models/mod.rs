mod pricing_policy;

pub use pricing_policy::PricingPolicy;
