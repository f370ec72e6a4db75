use std::collections::HashMap;
use crate::errors::Result;

// Design sheets are three levels deep, with all data in attributes:
//
//   <ItemService>
//     <ListItemDesigns>
//       <ItemDesign ItemDesignId="1" ItemDesignName="..." .../>
//     </ListItemDesigns>
//   </ItemService>
//
// The row elements are the only ones carrying the key attribute, so the
// conversion just collects every element that has one.
pub fn convert_design_sheet(
    xml: &str,
    key_name: &str,
) -> Result<HashMap<String, HashMap<String, String>>> {
    let document = roxmltree::Document::parse(xml)?;
    let mut result = HashMap::new();

    for node in document.descendants().filter(|node| node.is_element()) {
        if let Some(key) = node.attribute(key_name) {
            let attributes: HashMap<String, String> = node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect();
            result.insert(key.to_string(), attributes);
        }
    }

    Ok(result)
}
