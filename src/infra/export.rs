use std::io::{self, Cursor, Write};

use crate::core::{City, Network, Route};

pub trait Export {
    fn export<W: Write>(&self, network: &Network, out: &mut W) -> io::Result<()>;
}

/// Export of a network to [DOT](https://graphviz.org/doc/info/lang.html)
/// language.
pub struct Dot {
    name: String,
    get_city_label: Box<dyn Fn(&City) -> String>,
    get_route_label: Box<dyn Fn(&Route) -> String>,
}

impl Dot {
    pub fn new<FC, FR>(name: Option<String>, get_city_label: FC, get_route_label: FR) -> Self
    where
        FC: Fn(&City) -> String + 'static,
        FR: Fn(&Route) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_city_label: Box::new(get_city_label),
            get_route_label: Box::new(get_route_label),
        }
    }

    /// Cities labeled by their names, routes by their cost and distance.
    pub fn with_names(name: Option<String>) -> Self {
        Self::new(
            name,
            |city| city.name().to_owned(),
            |route| format!("${} / {}", grouped(route.cost(), 2), grouped(route.distance(), 1)),
        )
    }

    pub fn to_string(&self, network: &Network) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(network, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl Export for Dot {
    fn export<W: Write>(&self, network: &Network, out: &mut W) -> io::Result<()> {
        out.write_all(b"graph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (id, city) in network.cities() {
            writeln!(out, "    {} [label={:?}];", id, (self.get_city_label)(city))?;
        }

        for route in network.routes() {
            let [from, to] = route.route().endpoints();
            writeln!(
                out,
                "    {} -- {} [label={:?}];",
                from,
                to,
                (self.get_route_label)(route.route())
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

/// Formats a number with fixed number of decimal places and comma as the
/// thousands separator, e.g. `1,234.50`.
pub fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int, frac) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int.len() / 3 + 1);

    if value.is_sign_negative() && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }

    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }

    out
}

/// Names of all cities, one per line.
pub fn city_listing(network: &Network) -> String {
    let mut out = String::from("Cities Served:\n");
    for (_, city) in network.cities() {
        out.push_str(&format!("    {}\n", city.name()));
    }
    out
}

/// All direct routes in four aligned columns: from, to, cost and distance.
/// Each route is listed once, in the direction it was added.
pub fn route_table(network: &Network) -> String {
    let mut out = String::from("Direct Routes:\n");

    out.push_str(&format!(
        "{:<15} {:<15} {:<15} {:<15}\n",
        "From (City)", "To (City)", "Cost ($)", "Distance (Miles)"
    ));
    out.push_str(&format!(
        "{:<15} {:<15} {:<15} {:<15}\n",
        "----------", "----------", "----------", "----------"
    ));

    for route in network.routes() {
        let [from, to] = route.route().endpoints();
        out.push_str(&format!(
            "{:<15} {:<15} ${:<15.2} {:<15.1}\n",
            network.city_name(from),
            network.city_name(to),
            route.cost(),
            route.distance()
        ));
    }

    out
}
