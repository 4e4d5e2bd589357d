//! Python bindings for tabtex

use pyo3::exceptions::{PyIOError, PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::sync::GILOnceCell;
use pyo3::types::{PyBool, PyFloat, PyType};

use tabtex::{CellValue, Table, TableError};

fn to_py_err(err: TableError) -> PyErr {
    match err {
        TableError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        TableError::Io { .. } => PyIOError::new_err(err.to_string()),
        TableError::Validation { .. } | TableError::Parse { .. } => {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Instances of `numbers.Number` (bool, numpy scalars, `Decimal`, `Fraction`
/// included) become numeric cells, everything else `str(value)`
fn to_cell(value: &Bound<'_, PyAny>) -> PyResult<CellValue> {
    static NUMBER: GILOnceCell<Py<PyType>> = GILOnceCell::new();

    if value.is_instance_of::<PyBool>() {
        return Ok(CellValue::from(value.extract::<bool>()?));
    }
    if value.is_instance_of::<PyFloat>() {
        return Ok(CellValue::Float(value.extract::<f64>()?));
    }
    if value.is_instance(NUMBER.import(value.py(), "numbers", "Number")?.as_any())? {
        // __index__ for integral types, __float__ for the rest
        if let Ok(v) = value.extract::<i64>() {
            return Ok(CellValue::Int(v));
        }
        if let Ok(v) = value.extract::<f64>() {
            return Ok(CellValue::Float(v));
        }
    }
    Ok(CellValue::Text(value.str()?.extract::<String>()?))
}

fn to_cells(values: &[Bound<'_, PyAny>]) -> PyResult<Vec<CellValue>> {
    values.iter().map(to_cell).collect()
}

/// Encapsulates a LaTeX table
#[pyclass(name = "Table", module = "tabtex")]
struct PyTable {
    inner: Table,
}

#[pymethods]
impl PyTable {
    #[new]
    #[pyo3(signature = (header, caption=None, scale=1.0, layout=None))]
    fn new(
        header: Vec<String>,
        caption: Option<String>,
        scale: f64,
        layout: Option<&str>,
    ) -> PyResult<Self> {
        let mut inner = Table::new(header).with_scale(scale);
        inner.set_caption(caption);
        if let Some(layout) = layout {
            inner.set_layout(layout).map_err(to_py_err)?;
        }
        Ok(PyTable { inner })
    }

    #[getter]
    fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    fn headers(&self) -> Vec<String> {
        self.inner.headers().to_vec()
    }

    #[getter]
    fn caption(&self) -> String {
        self.inner.caption().to_string()
    }

    #[getter]
    fn layout(&self) -> String {
        self.inner.layout()
    }

    #[getter]
    fn scale(&self) -> f64 {
        self.inner.scale()
    }

    #[getter]
    fn get_number_precision(&self) -> usize {
        self.inner.number_precision()
    }

    #[setter]
    fn set_number_precision(&mut self, value: usize) {
        self.inner.set_number_precision(value);
    }

    #[pyo3(signature = (layout_string, idx=None))]
    fn set_layout(&mut self, layout_string: &str, idx: Option<usize>) -> PyResult<()> {
        match idx {
            Some(i) => self.inner.set_column_layout(i, layout_string),
            None => self.inner.set_layout(layout_string),
        }
        .map_err(to_py_err)
    }

    fn add_separator(&mut self) {
        self.inner.add_separator();
    }

    fn add_row(&mut self, row_data: Vec<Bound<'_, PyAny>>) -> PyResult<()> {
        let cells = to_cells(&row_data)?;
        self.inner.add_row(cells).map_err(to_py_err)
    }

    #[pyo3(signature = (multicol_data, num_cols=None, align="c", other_data=None))]
    fn add_multi_column(
        &mut self,
        multicol_data: Bound<'_, PyAny>,
        num_cols: Option<usize>,
        align: &str,
        other_data: Option<Vec<Bound<'_, PyAny>>>,
    ) -> PyResult<()> {
        let value = to_cell(&multicol_data)?;
        let trailing = to_cells(&other_data.unwrap_or_default())?;
        self.inner
            .add_multi_column(value, num_cols, align, trailing)
            .map_err(to_py_err)
    }

    /// The table as a list of LaTeX lines
    fn render(&self) -> Vec<String> {
        self.inner.render()
    }

    fn save(&self, file_path: std::path::PathBuf) -> PyResult<()> {
        self.inner.save(file_path).map_err(to_py_err)
    }

    fn __str__(&self) -> String {
        self.inner.to_latex()
    }

    fn __repr__(&self) -> String {
        format!(
            "Table(cols={}, rows={}, caption={:?})",
            self.inner.cols(),
            self.inner.rows(),
            self.inner.caption()
        )
    }
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTable>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
