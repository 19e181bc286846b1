//! Unit definitions - 110 units across 14 categories

use std::f64::consts::PI;
use std::sync::LazyLock;
use tracing::debug;
use unitref_core::UnitrefError;
use crate::category::{CategoryId, CategoryInfo, Group};
use crate::common::{CommonConversion, COMMON_CONVERSIONS};
use crate::{Transform, Unit};

/// Global unit catalog
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// Catalog of every category and its units.
///
/// Categories and units keep their registration order, which is also the
/// display order. The first unit of each category is its base unit.
pub struct Catalog {
    categories: Vec<CategoryInfo>,
    units: Vec<Vec<Unit>>,
    common: &'static [CommonConversion],
}

impl Catalog {
    pub fn new() -> Self {
        let mut catalog = Catalog {
            categories: Vec::with_capacity(CategoryId::ALL.len()),
            units: vec![Vec::new(); CategoryId::ALL.len()],
            common: &COMMON_CONVERSIONS,
        };
        catalog.register_categories();
        catalog.register_all_units();
        debug!(
            categories = catalog.categories.len(),
            units = catalog.unit_count(),
            "unit catalog built"
        );
        catalog
    }

    /// All categories, in display order
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Display information for a category
    pub fn info(&self, id: CategoryId) -> &CategoryInfo {
        &self.categories[id as usize]
    }

    /// Look up a category by its string identifier
    pub fn category(&self, id: &str) -> Option<&CategoryInfo> {
        CategoryId::parse(id).map(|c| self.info(c))
    }

    /// Categories belonging to a presentation group
    pub fn by_group(&self, group: Group) -> Vec<&CategoryInfo> {
        self.categories.iter()
            .filter(|c| c.group == group)
            .collect()
    }

    /// Units of a category, in display order
    pub fn units(&self, category: CategoryId) -> &[Unit] {
        &self.units[category as usize]
    }

    /// Get a unit by id within a category
    pub fn unit(&self, category: CategoryId, id: &str) -> Option<&Unit> {
        self.units(category).iter().find(|u| u.id == id)
    }

    /// Get a unit by display symbol within a category
    pub fn unit_by_symbol(&self, category: CategoryId, symbol: &str) -> Option<&Unit> {
        self.units(category).iter().find(|u| u.symbol == symbol)
    }

    /// Look up a unit from untrusted string identifiers (e.g. URL segments)
    pub fn find_unit(&self, category: &str, id: &str) -> Option<&Unit> {
        CategoryId::parse(category).and_then(|c| self.unit(c, id))
    }

    /// Resolve a unit by id, falling back to its symbol, with a structured
    /// error naming whichever identifier was not found.
    pub fn require_unit(&self, category: &str, key: &str) -> Result<(CategoryId, &Unit), UnitrefError> {
        let id = CategoryId::parse(category)
            .ok_or_else(|| UnitrefError::unknown_category(category))?;
        self.unit(id, key)
            .or_else(|| self.unit_by_symbol(id, key))
            .map(|unit| (id, unit))
            .ok_or_else(|| UnitrefError::unknown_unit(category, key))
    }

    /// Curated list of frequently requested conversions
    pub fn common_conversions(&self) -> &[CommonConversion] {
        self.common
    }

    pub fn unit_count(&self) -> usize {
        self.units.iter().map(Vec::len).sum()
    }

    fn register(&mut self, category: CategoryId, unit: Unit) {
        self.units[category as usize].push(unit);
    }

    fn register_categories(&mut self) {
        use CategoryId::*;
        self.categories = vec![
            CategoryInfo::new(Length, "Length", "📏", Group::Common),
            CategoryInfo::new(Temperature, "Temperature", "🌡️", Group::Common),
            CategoryInfo::new(Area, "Area", "⬛", Group::Common),
            CategoryInfo::new(Volume, "Volume", "🧊", Group::Common),
            CategoryInfo::new(Weight, "Weight", "⚖️", Group::Common),
            CategoryInfo::new(Time, "Time", "⏱️", Group::Common),
            CategoryInfo::new(Speed, "Speed", "🚀", Group::Engineering),
            CategoryInfo::new(Energy, "Energy", "⚡", Group::Engineering),
            CategoryInfo::new(Power, "Power", "💡", Group::Engineering),
            CategoryInfo::new(Pressure, "Pressure", "🎯", Group::Engineering),
            CategoryInfo::new(Force, "Force", "💪", Group::Engineering),
            CategoryInfo::new(Data, "Data Storage", "💾", Group::Other),
            CategoryInfo::new(Angle, "Angle", "📐", Group::Other),
            CategoryInfo::new(Fuel, "Fuel Economy", "⛽", Group::Other),
        ];
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_temperature_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_weight_units();
        self.register_time_units();
        self.register_speed_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_pressure_units();
        self.register_force_units();
        self.register_data_units();
        self.register_angle_units();
        self.register_fuel_units();
    }

    fn register_length_units(&mut self) {
        let c = CategoryId::Length;
        // SI length units
        self.register(c, Unit::new("meter", "Meter", "m", Transform::Identity).describe(
            "A meter (symbol: m) is the base unit of length in the International System of Units (SI). It is defined as the length of the path travelled by light in vacuum during a time interval of 1/299,792,458 of a second.",
            "The meter was originally defined in 1793 as one ten-millionth of the distance from the equator to the North Pole along a great circle. It has been redefined several times, with the current definition adopted in 1983.",
            "The meter is used worldwide as the standard unit of length in most countries. It is used in science, engineering, and everyday measurements.",
        ));
        self.register(c, Unit::new("kilometer", "Kilometer", "km", Transform::scale(1000.0)).describe(
            "A kilometer (symbol: km) is a unit of length equal to 1,000 meters. The prefix \"kilo-\" means one thousand.",
            "The kilometer was introduced with the metric system in the 1790s as a convenient unit for measuring longer distances.",
            "Kilometers are commonly used to express distances between geographical locations on land in most countries.",
        ));
        self.register(c, Unit::new("centimeter", "Centimeter", "cm", Transform::divide(100.0)).describe(
            "A centimeter (symbol: cm) is a unit of length in the International System of Units (SI), equal to one hundredth of a meter.",
            "The centimeter is based on the SI unit meter, and as the prefix \"centi\" indicates, is equal to one hundredth of a meter.",
            "The centimeter is used in all sorts of applications worldwide where a smaller denomination of the meter is required. Height is commonly measured in centimeters outside of countries like the United States.",
        ));
        self.register(c, Unit::new("millimeter", "Millimeter", "mm", Transform::divide(1000.0)).describe(
            "A millimeter (symbol: mm) is a unit of length equal to one thousandth of a meter.",
            "The millimeter is part of the metric system, introduced in France in the 1790s.",
            "Millimeters are commonly used for small-scale measurements in engineering, manufacturing, and construction.",
        ));
        self.register(c, Unit::new("micrometer", "Micrometer", "μm", Transform::divide(1_000_000.0)));
        self.register(c, Unit::new("nanometer", "Nanometer", "nm", Transform::divide(1_000_000_000.0)));

        // Imperial/US length units
        self.register(c, Unit::new("mile", "Mile", "mi", Transform::scale(1609.344)).describe(
            "A mile is a unit of length equal to 5,280 feet, 1,760 yards, or exactly 1,609.344 meters.",
            "The mile is derived from the Roman \"mille passus\" (thousand paces), which was about 1,480 meters. The modern international mile was standardized in 1959.",
            "The mile is primarily used in the United States, United Kingdom, and other countries that use the imperial system for road distances and speed limits.",
        ));
        self.register(c, Unit::new("yard", "Yard", "yd", Transform::scale(0.9144)).describe(
            "A yard is a unit of length equal to 3 feet or exactly 0.9144 meters.",
            "The yard originated in England as the distance from the tip of the nose to the end of the thumb of King Henry I.",
            "Yards are commonly used in the United States for measuring distances in American football, golf, and fabric.",
        ));
        self.register(c, Unit::new("foot", "Foot", "ft", Transform::scale(0.3048)).describe(
            "A foot is a unit of length equal to 12 inches or exactly 0.3048 meters.",
            "The foot was historically based on the length of a human foot. The international foot was defined in 1959 as exactly 0.3048 meters.",
            "Feet are commonly used in the United States for measuring height, altitude, and room dimensions.",
        ));
        self.register(c, Unit::new("inch", "Inch", "in", Transform::scale(0.0254)).describe(
            "An inch (symbol: in) is a unit of length in the imperial and US customary systems of measurement. An inch was defined to be equivalent to exactly 25.4 millimeters in 1959.",
            "The term \"inch\" was derived from the Latin unit \"uncia\" which equated to \"one-twelfth\" of a Roman foot. One of the earliest definitions was based on barleycorns, where an inch was equal to the length of three grains of dry, round barley placed end-to-end.",
            "The inch is mostly used in the United States, Canada, and the United Kingdom. It is also sometimes used in Japan in relation to electronic parts, like the size of display screens.",
        ));

        // Astronomical
        self.register(c, Unit::new("lightyear", "Light Year", "ly", Transform::scale(9.461e15)));
    }

    fn register_temperature_units(&mut self) {
        let c = CategoryId::Temperature;
        // Base: Celsius. Scales with a different zero are affine.
        self.register(c, Unit::new("celsius", "Celsius", "°C", Transform::Identity).describe(
            "The Celsius scale is a temperature scale where 0°C is the freezing point of water and 100°C is the boiling point at standard atmospheric pressure.",
            "The Celsius scale was first proposed by Swedish astronomer Anders Celsius in 1742. Originally, the scale was reversed with 100° as the freezing point.",
            "Celsius is used by most countries in the world for everyday temperature measurements and is the standard in scientific contexts.",
        ));
        self.register(c, Unit::new("fahrenheit", "Fahrenheit", "°F", Transform::affine(32.0, 5.0, 9.0)).describe(
            "The Fahrenheit scale is a temperature scale where 32°F is the freezing point of water and 212°F is the boiling point at standard atmospheric pressure.",
            "The Fahrenheit scale was proposed by German physicist Daniel Gabriel Fahrenheit in 1724. He based it on three reference points including brine solution.",
            "Fahrenheit is primarily used in the United States for everyday temperature measurements, weather forecasts, and cooking.",
        ));
        self.register(c, Unit::new("kelvin", "Kelvin", "K", Transform::affine(273.15, 1.0, 1.0)).describe(
            "Kelvin is the SI base unit of temperature. It is defined by setting the Boltzmann constant to exactly 1.380649×10−23 J/K.",
            "Named after Lord Kelvin (William Thomson), who wrote of the need for an \"absolute thermometric scale\" in 1848.",
            "Kelvin is used in science and engineering, particularly in physics and chemistry, as it starts at absolute zero.",
        ));
        self.register(c, Unit::new("rankine", "Rankine", "°R", Transform::affine(491.67, 5.0, 9.0)));
    }

    fn register_area_units(&mut self) {
        let c = CategoryId::Area;
        self.register(c, Unit::new("sqmeter", "Square Meter", "m²", Transform::Identity));
        self.register(c, Unit::new("sqkilometer", "Square Kilometer", "km²", Transform::scale(1_000_000.0)));
        self.register(c, Unit::new("sqcentimeter", "Square Centimeter", "cm²", Transform::divide(10_000.0)));
        self.register(c, Unit::new("sqmillimeter", "Square Millimeter", "mm²", Transform::divide(1_000_000.0)));
        self.register(c, Unit::new("sqmile", "Square Mile", "mi²", Transform::scale(2589988.11)));
        self.register(c, Unit::new("sqyard", "Square Yard", "yd²", Transform::scale(0.836127)));
        self.register(c, Unit::new("sqfoot", "Square Foot", "ft²", Transform::scale(0.092903)));
        self.register(c, Unit::new("sqinch", "Square Inch", "in²", Transform::scale(0.00064516)));
        self.register(c, Unit::new("hectare", "Hectare", "ha", Transform::scale(10_000.0)));
        self.register(c, Unit::new("acre", "Acre", "ac", Transform::scale(4046.86)));
    }

    fn register_volume_units(&mut self) {
        let c = CategoryId::Volume;
        // Metric
        self.register(c, Unit::new("liter", "Liter", "L", Transform::Identity));
        self.register(c, Unit::new("milliliter", "Milliliter", "mL", Transform::divide(1000.0)));
        self.register(c, Unit::new("cubicmeter", "Cubic Meter", "m³", Transform::scale(1000.0)));
        self.register(c, Unit::new("cubiccentimeter", "Cubic Centimeter", "cm³", Transform::divide(1000.0)));

        // US customary
        self.register(c, Unit::new("gallon", "Gallon (US)", "gal", Transform::scale(3.78541)));
        self.register(c, Unit::new("quart", "Quart (US)", "qt", Transform::scale(0.946353)));
        self.register(c, Unit::new("pint", "Pint (US)", "pt", Transform::scale(0.473176)));
        self.register(c, Unit::new("cup", "Cup (US)", "cup", Transform::scale(0.236588)));
        self.register(c, Unit::new("fluidounce", "Fluid Ounce (US)", "fl oz", Transform::scale(0.0295735)));
        self.register(c, Unit::new("tablespoon", "Tablespoon", "tbsp", Transform::scale(0.0147868)));
        self.register(c, Unit::new("teaspoon", "Teaspoon", "tsp", Transform::scale(0.00492892)));
    }

    fn register_weight_units(&mut self) {
        let c = CategoryId::Weight;
        // SI mass units
        self.register(c, Unit::new("kilogram", "Kilogram", "kg", Transform::Identity).describe(
            "The kilogram (symbol: kg) is the base unit of mass in the International System of Units (SI). It is defined by setting the Planck constant h to exactly 6.62607015×10−34 J⋅s.",
            "The kilogram was originally defined in 1795 as the mass of one liter of water. In 2019, it was redefined based on the Planck constant.",
            "The kilogram is used worldwide as the standard unit of mass in science, industry, and commerce.",
        ));
        self.register(c, Unit::new("gram", "Gram", "g", Transform::divide(1000.0)));
        self.register(c, Unit::new("milligram", "Milligram", "mg", Transform::divide(1_000_000.0)));
        self.register(c, Unit::new("microgram", "Microgram", "μg", Transform::divide(1_000_000_000.0)));
        self.register(c, Unit::new("metricton", "Metric Ton", "t", Transform::scale(1000.0)));

        // Imperial/US mass units
        self.register(c, Unit::new("pound", "Pound", "lb", Transform::scale(0.453592)).describe(
            "A pound (symbol: lb) is a unit of mass used in the imperial and US customary systems of measurement. One pound is defined as exactly 0.45359237 kilograms.",
            "The pound has origins in the Roman libra. The international avoirdupois pound was defined in 1959.",
            "The pound is commonly used in the United States for measuring body weight, groceries, and shipping.",
        ));
        self.register(c, Unit::new("ounce", "Ounce", "oz", Transform::scale(0.0283495)).describe(
            "An ounce (symbol: oz) is a unit of mass equal to 1/16 of a pound, or approximately 28.35 grams.",
            "The term ounce comes from the Latin word \"uncia,\" meaning one twelfth part.",
            "Ounces are commonly used in the United States for food packaging, postal services, and cooking recipes.",
        ));
        self.register(c, Unit::new("stone", "Stone", "st", Transform::scale(6.35029)));
        self.register(c, Unit::new("uston", "US Ton", "ton", Transform::scale(907.185)));
        self.register(c, Unit::new("imperialton", "Imperial Ton", "long ton", Transform::scale(1016.05)));
    }

    fn register_time_units(&mut self) {
        let c = CategoryId::Time;
        self.register(c, Unit::new("second", "Second", "s", Transform::Identity));
        self.register(c, Unit::new("millisecond", "Millisecond", "ms", Transform::divide(1000.0)));
        self.register(c, Unit::new("microsecond", "Microsecond", "μs", Transform::divide(1_000_000.0)));
        self.register(c, Unit::new("nanosecond", "Nanosecond", "ns", Transform::divide(1_000_000_000.0)));
        self.register(c, Unit::new("minute", "Minute", "min", Transform::scale(60.0)));
        self.register(c, Unit::new("hour", "Hour", "h", Transform::scale(3600.0)));
        self.register(c, Unit::new("day", "Day", "d", Transform::scale(86400.0)));
        self.register(c, Unit::new("week", "Week", "wk", Transform::scale(604800.0)));
        self.register(c, Unit::new("month", "Month", "mo", Transform::scale(2628000.0))); // 30.4167 days
        self.register(c, Unit::new("year", "Year", "yr", Transform::scale(31536000.0))); // 365 days
    }

    fn register_speed_units(&mut self) {
        let c = CategoryId::Speed;
        self.register(c, Unit::new("mps", "Meters per Second", "m/s", Transform::Identity));
        self.register(c, Unit::new("kph", "Kilometers per Hour", "km/h", Transform::divide(3.6)));
        self.register(c, Unit::new("mph", "Miles per Hour", "mph", Transform::scale(0.44704)));
        self.register(c, Unit::new("fps", "Feet per Second", "ft/s", Transform::scale(0.3048)));
        self.register(c, Unit::new("knot", "Knot", "kn", Transform::scale(0.514444)));
        self.register(c, Unit::new("mach", "Mach", "Ma", Transform::scale(343.0))); // sea level, 20 °C
        self.register(c, Unit::new("lightspeed", "Speed of Light", "c", Transform::scale(299792458.0)));
    }

    fn register_energy_units(&mut self) {
        let c = CategoryId::Energy;
        self.register(c, Unit::new("joule", "Joule", "J", Transform::Identity));
        self.register(c, Unit::new("kilojoule", "Kilojoule", "kJ", Transform::scale(1000.0)));
        self.register(c, Unit::new("calorie", "Calorie", "cal", Transform::scale(4.184)));
        self.register(c, Unit::new("kilocalorie", "Kilocalorie", "kcal", Transform::scale(4184.0)));
        self.register(c, Unit::new("wh", "Watt Hour", "Wh", Transform::scale(3600.0)));
        self.register(c, Unit::new("kwh", "Kilowatt Hour", "kWh", Transform::scale(3_600_000.0)));
        self.register(c, Unit::new("ev", "Electronvolt", "eV", Transform::scale(1.602176634e-19)));
        self.register(c, Unit::new("btu", "British Thermal Unit", "BTU", Transform::scale(1055.06)));
        self.register(c, Unit::new("therm", "Therm", "thm", Transform::scale(105_505_600.0)));
    }

    fn register_power_units(&mut self) {
        let c = CategoryId::Power;
        self.register(c, Unit::new("watt", "Watt", "W", Transform::Identity));
        self.register(c, Unit::new("kilowatt", "Kilowatt", "kW", Transform::scale(1000.0)));
        self.register(c, Unit::new("megawatt", "Megawatt", "MW", Transform::scale(1_000_000.0)));
        self.register(c, Unit::new("horsepower", "Horsepower", "hp", Transform::scale(745.7)));
        self.register(c, Unit::new("btuperhour", "BTU/hour", "BTU/h", Transform::scale(0.293071)));
        self.register(c, Unit::new("footpoundpermin", "Foot-pound/minute", "ft⋅lbf/min", Transform::scale(0.0225970)));
    }

    fn register_pressure_units(&mut self) {
        let c = CategoryId::Pressure;
        self.register(c, Unit::new("pascal", "Pascal", "Pa", Transform::Identity));
        self.register(c, Unit::new("kilopascal", "Kilopascal", "kPa", Transform::scale(1000.0)));
        self.register(c, Unit::new("bar", "Bar", "bar", Transform::scale(100_000.0)));
        self.register(c, Unit::new("psi", "PSI", "psi", Transform::scale(6894.76)));
        self.register(c, Unit::new("atm", "Atmosphere", "atm", Transform::scale(101325.0)));
        self.register(c, Unit::new("torr", "Torr", "Torr", Transform::scale(133.322)));
        self.register(c, Unit::new("mmhg", "Millimeters of Mercury", "mmHg", Transform::scale(133.322)));
    }

    fn register_force_units(&mut self) {
        let c = CategoryId::Force;
        self.register(c, Unit::new("newton", "Newton", "N", Transform::Identity));
        self.register(c, Unit::new("kilonewton", "Kilonewton", "kN", Transform::scale(1000.0)));
        self.register(c, Unit::new("dyne", "Dyne", "dyn", Transform::scale(0.00001)));
        self.register(c, Unit::new("poundforce", "Pound-force", "lbf", Transform::scale(4.44822)));
        self.register(c, Unit::new("kgf", "Kilogram-force", "kgf", Transform::scale(9.80665)));
    }

    fn register_data_units(&mut self) {
        let c = CategoryId::Data;
        // Base: bit. Decimal prefixes are powers of 1000, binary ones of 1024.
        self.register(c, Unit::new("bit", "Bit", "b", Transform::Identity));
        self.register(c, Unit::new("byte", "Byte", "B", Transform::scale(8.0)));
        self.register(c, Unit::new("kilobyte", "Kilobyte", "KB", Transform::scale(8000.0)));
        self.register(c, Unit::new("megabyte", "Megabyte", "MB", Transform::scale(8e6)));
        self.register(c, Unit::new("gigabyte", "Gigabyte", "GB", Transform::scale(8e9)));
        self.register(c, Unit::new("terabyte", "Terabyte", "TB", Transform::scale(8e12)));
        self.register(c, Unit::new("petabyte", "Petabyte", "PB", Transform::scale(8e15)));
        self.register(c, Unit::new("kibibyte", "Kibibyte", "KiB", Transform::scale(8192.0)));
        self.register(c, Unit::new("mebibyte", "Mebibyte", "MiB", Transform::scale(8_388_608.0)));
        self.register(c, Unit::new("gibibyte", "Gibibyte", "GiB", Transform::scale(8_589_934_592.0)));
    }

    fn register_angle_units(&mut self) {
        let c = CategoryId::Angle;
        self.register(c, Unit::new("degree", "Degree", "°", Transform::Identity));
        self.register(c, Unit::new("radian", "Radian", "rad", Transform::ratio(180.0 / PI, PI / 180.0)));
        self.register(c, Unit::new("gradian", "Gradian", "gon", Transform::scale(0.9)));
        self.register(c, Unit::new("arcminute", "Arcminute", "'", Transform::divide(60.0)));
        self.register(c, Unit::new("arcsecond", "Arcsecond", "\"", Transform::divide(3600.0)));
        self.register(c, Unit::new("revolution", "Revolution", "rev", Transform::scale(360.0)));
    }

    fn register_fuel_units(&mut self) {
        let c = CategoryId::Fuel;
        // Base: km/L. Consumption (L/100km) is the reciprocal of economy.
        self.register(c, Unit::new("kmperliter", "Kilometers per Liter", "km/L", Transform::Identity));
        self.register(c, Unit::new("mpg", "Miles per Gallon (US)", "mpg", Transform::scale(0.425144)));
        self.register(c, Unit::new("mpgimp", "Miles per Gallon (Imp)", "mpg (imp)", Transform::scale(0.354006)));
        self.register(c, Unit::new("lper100km", "Liters per 100km", "L/100km", Transform::reciprocal(100.0)));
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use unitref_core::codes;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.categories().len(), 14);
        assert_eq!(CATALOG.unit_count(), 110);
        assert_eq!(CATALOG.units(CategoryId::Length).len(), 11);
        assert_eq!(CATALOG.units(CategoryId::Fuel).len(), 4);
    }

    #[test]
    fn test_categories_in_id_order() {
        for (info, id) in CATALOG.categories().iter().zip(CategoryId::ALL) {
            assert_eq!(info.id, id);
            assert_eq!(CATALOG.info(id).id, id);
        }
    }

    #[test]
    fn test_unit_ids_unique_per_category() {
        for id in CategoryId::ALL {
            let units = CATALOG.units(id);
            let ids: HashSet<_> = units.iter().map(|u| u.id).collect();
            assert_eq!(ids.len(), units.len(), "duplicate unit id in {}", id);
        }
    }

    #[test]
    fn test_first_unit_is_base() {
        for id in CategoryId::ALL {
            let units = CATALOG.units(id);
            assert_eq!(units[0].transform, Transform::Identity, "{}", id);
            assert!(
                units[1..].iter().all(|u| u.transform != Transform::Identity),
                "{} has more than one base unit",
                id
            );
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let foot = CATALOG.unit(CategoryId::Length, "foot").unwrap();
        assert_eq!(foot.symbol, "ft");
        assert!(CATALOG.find_unit("temperature", "kelvin").is_some());
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        assert!(CATALOG.unit(CategoryId::Length, "nonexistent").is_none());
        assert!(CATALOG.find_unit("length", "nonexistent").is_none());
        assert!(CATALOG.find_unit("nonexistent", "meter").is_none());
        assert!(CATALOG.category("nonexistent").is_none());
        // ids are scoped to their category
        assert!(CATALOG.find_unit("weight", "meter").is_none());
    }

    #[test]
    fn test_lookup_by_symbol() {
        let unit = CATALOG.unit_by_symbol(CategoryId::Temperature, "°F").unwrap();
        assert_eq!(unit.id, "fahrenheit");
    }

    #[test]
    fn test_require_unit() {
        let (category, unit) = CATALOG.require_unit("length", "km").unwrap();
        assert_eq!(category, CategoryId::Length);
        assert_eq!(unit.id, "kilometer");

        let err = CATALOG.require_unit("mass", "kg").unwrap_err();
        assert!(err.is(codes::UNKNOWN_CATEGORY));

        let err = CATALOG.require_unit("weight", "furlong").unwrap_err();
        assert!(err.is(codes::UNKNOWN_UNIT));
    }

    #[test]
    fn test_by_group() {
        let common: Vec<_> = CATALOG.by_group(Group::Common).iter().map(|c| c.id).collect();
        assert_eq!(common.len(), 6);
        assert_eq!(common[0], CategoryId::Length);
        assert_eq!(CATALOG.by_group(Group::Engineering).len(), 5);
        assert_eq!(CATALOG.by_group(Group::Other).len(), 3);
    }

    #[test]
    fn test_described_units() {
        let described: Vec<_> = CategoryId::ALL
            .iter()
            .flat_map(|c| CATALOG.units(*c))
            .filter(|u| u.has_description())
            .map(|u| u.id)
            .collect();
        assert_eq!(described.len(), 14);
        assert!(described.contains(&"inch"));
        assert!(described.contains(&"kelvin"));
    }
}
