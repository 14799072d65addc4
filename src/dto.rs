//! Transfer objects exchanged over HTTP and their mapping to persistence rows.
//!
//! The container `rename` on each type is the key the API envelope nests the
//! value under.

use super::error::{Error, Result};
use super::models::{Bar, BarBeer, Beer, Brewery, BreweryBeer};
use super::repository::Aggregate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "bar", rename_all = "camelCase")]
pub struct BarDto {
    pub bar_id: i32,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "beer", rename_all = "camelCase")]
pub struct BeerDto {
    pub beer_id: i32,
    pub name: String,
    pub percentage_alcohol_by_volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "brewery", rename_all = "camelCase")]
pub struct BreweryDto {
    pub brewery_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "barBeer", rename_all = "camelCase")]
pub struct BarBeerDto {
    pub id: i32,
    pub bar_id: i32,
    pub beer_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "breweryBeer", rename_all = "camelCase")]
pub struct BreweryBeerDto {
    pub id: i32,
    pub brewery_id: i32,
    pub beer_id: i32,
}

/// A bar with every beer it serves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarBeersDto {
    pub bar: BarDto,
    pub beers: Vec<BeerDto>,
}

/// A brewery with every beer it brews.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreweryBeersDto {
    pub brewery: BreweryDto,
    pub beers: Vec<BeerDto>,
}

fn invalid(message: String) -> Error {
    error!("{}", message);
    Error::invalid_request(message)
}

fn require_name(name: &str, entity: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid(format!("{} name is required", entity)));
    }
    Ok(())
}

impl BarDto {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name, "Bar")
    }
}

impl BeerDto {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name, "Beer")?;
        let abv = self.percentage_alcohol_by_volume;
        if !abv.is_finite() || abv < 0.0 {
            return Err(invalid(
                "PercentageAlcoholByVolume must be a finite, non-negative number".into(),
            ));
        }
        Ok(())
    }
}

impl BreweryDto {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name, "Brewery")
    }
}

impl From<Bar> for BarDto {
    fn from(bar: Bar) -> BarDto {
        BarDto {
            bar_id: bar.id,
            name: bar.name,
            address: bar.address,
        }
    }
}

impl From<BarDto> for Bar {
    fn from(dto: BarDto) -> Bar {
        Bar {
            id: dto.bar_id,
            name: dto.name,
            address: dto.address,
        }
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> BeerDto {
        BeerDto {
            beer_id: beer.id,
            name: beer.name,
            percentage_alcohol_by_volume: beer.abv,
        }
    }
}

impl From<BeerDto> for Beer {
    fn from(dto: BeerDto) -> Beer {
        Beer {
            id: dto.beer_id,
            name: dto.name,
            abv: dto.percentage_alcohol_by_volume,
        }
    }
}

impl From<Brewery> for BreweryDto {
    fn from(brewery: Brewery) -> BreweryDto {
        BreweryDto {
            brewery_id: brewery.id,
            name: brewery.name,
        }
    }
}

impl From<BreweryDto> for Brewery {
    fn from(dto: BreweryDto) -> Brewery {
        Brewery {
            id: dto.brewery_id,
            name: dto.name,
        }
    }
}

impl From<BarBeer> for BarBeerDto {
    fn from(link: BarBeer) -> BarBeerDto {
        BarBeerDto {
            id: link.id,
            bar_id: link.bar_id,
            beer_id: link.beer_id,
        }
    }
}

impl From<BarBeerDto> for BarBeer {
    fn from(dto: BarBeerDto) -> BarBeer {
        BarBeer {
            id: dto.id,
            bar_id: dto.bar_id,
            beer_id: dto.beer_id,
        }
    }
}

impl From<BreweryBeer> for BreweryBeerDto {
    fn from(link: BreweryBeer) -> BreweryBeerDto {
        BreweryBeerDto {
            id: link.id,
            brewery_id: link.brewery_id,
            beer_id: link.beer_id,
        }
    }
}

impl From<BreweryBeerDto> for BreweryBeer {
    fn from(dto: BreweryBeerDto) -> BreweryBeer {
        BreweryBeer {
            id: dto.id,
            brewery_id: dto.brewery_id,
            beer_id: dto.beer_id,
        }
    }
}

impl From<Aggregate<Bar>> for BarBeersDto {
    fn from(aggregate: Aggregate<Bar>) -> BarBeersDto {
        BarBeersDto {
            bar: aggregate.parent.into(),
            beers: aggregate.beers.into_iter().map(BeerDto::from).collect(),
        }
    }
}

impl From<Aggregate<Brewery>> for BreweryBeersDto {
    fn from(aggregate: Aggregate<Brewery>) -> BreweryBeersDto {
        BreweryBeersDto {
            brewery: aggregate.parent.into(),
            beers: aggregate.beers.into_iter().map(BeerDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beer_uses_the_public_field_names() {
        let dto: BeerDto = serde_json::from_str(
            r#"{"beerId": 10, "name": "Lager", "percentageAlcoholByVolume": 4.5}"#,
        )
        .unwrap();
        assert_eq!(
            Beer::from(dto.clone()),
            Beer {
                id: 10,
                name: "Lager".into(),
                abv: 4.5,
            }
        );
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["percentageAlcoholByVolume"], 4.5);
    }

    #[test]
    fn bar_address_is_optional() {
        let dto: BarDto = serde_json::from_str(r#"{"barId": 1, "name": "Rose"}"#).unwrap();
        assert_eq!(dto.address, None);
    }

    #[test]
    fn blank_names_are_rejected() {
        let bar = BarDto {
            bar_id: 1,
            name: "   ".into(),
            address: None,
        };
        assert_eq!(bar.validate().unwrap_err().to_string(), "Bar name is required");

        let brewery = BreweryDto {
            brewery_id: 1,
            name: String::new(),
        };
        assert_eq!(
            brewery.validate().unwrap_err().to_string(),
            "Brewery name is required"
        );
    }

    #[test]
    fn alcohol_must_be_a_sane_percentage() {
        let mut beer = BeerDto {
            beer_id: 1,
            name: "Lager".into(),
            percentage_alcohol_by_volume: -1.0,
        };
        assert!(beer.validate().is_err());
        beer.percentage_alcohol_by_volume = f64::NAN;
        assert!(beer.validate().is_err());
        beer.percentage_alcohol_by_volume = 0.0;
        assert!(beer.validate().is_ok());
    }
}
